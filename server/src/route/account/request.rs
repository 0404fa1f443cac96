use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{UpdateProfileDto, UpsertAddressDto};

/// Profile edits post only the fields the user changed.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    name: Option<String>,
    phone_number: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_dto(self, user_id: Uuid) -> UpdateProfileDto {
        UpdateProfileDto {
            user_id,
            name: self.name,
            phone_number: self.phone_number,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpsertAddressRequest {
    street: String,
    house_number: String,
    postal_code: String,
    city: String,
    country: String,
}

impl UpsertAddressRequest {
    pub fn into_dto(self, user_id: Uuid) -> UpsertAddressDto {
        UpsertAddressDto {
            user_id,
            street: self.street,
            house_number: self.house_number,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
        }
    }
}
