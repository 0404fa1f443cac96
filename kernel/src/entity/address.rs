mod id;
mod lines;

pub use self::{id::*, lines::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

/// Postal address attached to an account profile. Deleting an address leaves
/// the owning user intact (the reference is nulled at the storage layer).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Address {
    id: AddressId,
    street: Street,
    house_number: HouseNumber,
    postal_code: PostalCode,
    city: City,
    country: Country,
}

impl Address {
    pub fn new(
        id: AddressId,
        street: Street,
        house_number: HouseNumber,
        postal_code: PostalCode,
        city: City,
        country: Country,
    ) -> Self {
        Self {
            id,
            street,
            house_number,
            postal_code,
            city,
            country,
        }
    }
}
