use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructRental, DestructRentalSummary, Rental, RentalSummary};

#[derive(Debug, Clone)]
pub struct RentGameDto {
    pub slug: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct ReturnGameDto {
    pub rental_id: i64,
}

#[derive(Debug, Clone)]
pub struct ListOpenRentalsDto {
    pub as_of: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GetUserRentalsDto {
    pub user_id: Uuid,
    pub as_of: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: i64,
    pub user_id: Uuid,
    pub inventory_id: i64,
    pub rented_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub total_cost: Decimal,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            user_id,
            inventory_id,
            rented_at,
            returned_at,
            total_cost,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            inventory_id: inventory_id.into(),
            rented_at: rented_at.into(),
            returned_at: returned_at.map(Into::into),
            total_cost: total_cost.into(),
        }
    }
}

/// An open rental as shown on the staff list and the account page, with the
/// cost accrued up to `as_of`.
#[derive(Debug, Clone)]
pub struct OpenRentalDto {
    pub id: i64,
    pub user_id: Uuid,
    pub user_name: String,
    pub game_name: String,
    pub game_slug: String,
    pub rented_at: OffsetDateTime,
    pub daily_price: Decimal,
    pub accrued_cost: Decimal,
}

impl OpenRentalDto {
    pub fn from_summary(summary: RentalSummary, as_of: OffsetDateTime) -> Self {
        let accrued_cost = summary.accrued_cost(as_of).into();
        let DestructRentalSummary {
            id,
            user_id,
            user_name,
            game_name,
            game_slug,
            rented_at,
            daily_price,
        } = summary.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            game_name: game_name.into(),
            game_slug: game_slug.into(),
            rented_at: rented_at.into(),
            daily_price: daily_price.into(),
            accrued_cost,
        }
    }
}
