mod email;
mod id;
mod name;
mod phone;

pub use self::{email::*, id::*, name::*, phone::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::AddressId;

/// An account. Authentication itself happens outside this system; the server
/// only receives an already-authenticated user id and checks `is_staff` for
/// the administration routes.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct User {
    id: UserId,
    name: UserName,
    email: UserEmail,
    phone_number: Option<PhoneNumber>,
    is_staff: bool,
    address_id: Option<AddressId>,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        email: UserEmail,
        phone_number: Option<PhoneNumber>,
        is_staff: bool,
        address_id: Option<AddressId>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone_number,
            is_staff,
            address_id,
        }
    }
}
