use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Street(String);

impl Street {
    pub fn new(street: impl Into<String>) -> Self {
        Self(street.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct HouseNumber(String);

impl HouseNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct City(String);

impl City {
    pub fn new(city: impl Into<String>) -> Self {
        Self(city.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Country(String);

impl Country {
    pub fn new(country: impl Into<String>) -> Self {
        Self(country.into())
    }
}
