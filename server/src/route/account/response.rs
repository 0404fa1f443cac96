use serde::Serialize;
use uuid::Uuid;

use application::transfer::{AccountDto, AddressDto, OpenRentalDto};

use crate::route::OpenRentalResponse;

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    id: Uuid,
    name: String,
    email: String,
    phone_number: Option<String>,
    is_staff: bool,
    address: Option<AddressResponse>,
    open_rentals: Vec<OpenRentalResponse>,
}

impl AccountResponse {
    pub fn new(account: AccountDto, rentals: Vec<OpenRentalDto>) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            is_staff: account.is_staff,
            address: account.address.map(AddressResponse::from),
            open_rentals: rentals.into_iter().map(OpenRentalResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    street: String,
    house_number: String,
    postal_code: String,
    city: String,
    country: String,
}

impl From<AddressDto> for AddressResponse {
    fn from(value: AddressDto) -> Self {
        Self {
            street: value.street,
            house_number: value.house_number,
            postal_code: value.postal_code,
            city: value.city,
            country: value.country,
        }
    }
}
