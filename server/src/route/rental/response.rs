use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{OpenRentalDto, RentalDto};

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: i64,
    user_id: Uuid,
    inventory_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    rented_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    returned_at: Option<OffsetDateTime>,
    total_cost: Decimal,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            inventory_id: value.inventory_id,
            rented_at: value.rented_at,
            returned_at: value.returned_at,
            total_cost: value.total_cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OpenRentalResponse {
    id: i64,
    user_id: Uuid,
    user_name: String,
    game_name: String,
    game_slug: String,
    #[serde(with = "time::serde::rfc3339")]
    rented_at: OffsetDateTime,
    daily_price: Decimal,
    accrued_cost: Decimal,
}

impl From<OpenRentalDto> for OpenRentalResponse {
    fn from(value: OpenRentalDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            user_name: value.user_name,
            game_name: value.game_name,
            game_slug: value.game_slug,
            rented_at: value.rented_at,
            daily_price: value.daily_price,
            accrued_cost: value.accrued_cost,
        }
    }
}
