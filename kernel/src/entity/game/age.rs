use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MinimumAge(i32);

impl MinimumAge {
    pub fn new(age: impl Into<i32>) -> Self {
        Self(age.into())
    }
}
