use uuid::Uuid;

use kernel::prelude::entity::{Address, DestructAddress, DestructUser, User};

#[derive(Debug, Clone)]
pub struct GetAccountDto {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct AccountDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_staff: bool,
    pub address: Option<AddressDto>,
}

impl AccountDto {
    pub fn new(user: User, address: Option<Address>) -> Self {
        let DestructUser {
            id,
            name,
            email,
            phone_number,
            is_staff,
            ..
        } = user.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.map(Into::into),
            is_staff,
            address: address.map(AddressDto::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddressDto {
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl From<Address> for AddressDto {
    fn from(value: Address) -> Self {
        let DestructAddress {
            street,
            house_number,
            postal_code,
            city,
            country,
            ..
        } = value.into_destruct();
        Self {
            street: street.into(),
            house_number: house_number.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Absent fields keep the stored value, mirroring the profile form which only
/// posts what the user edited.
#[derive(Debug, Clone)]
pub struct UpdateProfileDto {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpsertAddressDto {
    pub user_id: Uuid,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}
