use destructure::Destructure;
use time::OffsetDateTime;
use vodca::References;

use crate::entity::{
    accrued_cost, DailyPrice, GameName, GameSlug, RentalCost, RentalId, RentedAt, UserId, UserName,
};

/// Read model for rental listings: an open rental joined with the game and
/// the renting user. Accrued cost is computed at render time, never stored.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RentalSummary {
    id: RentalId,
    user_id: UserId,
    user_name: UserName,
    game_name: GameName,
    game_slug: GameSlug,
    rented_at: RentedAt,
    daily_price: DailyPrice,
}

impl RentalSummary {
    pub fn new(
        id: RentalId,
        user_id: UserId,
        user_name: UserName,
        game_name: GameName,
        game_slug: GameSlug,
        rented_at: RentedAt,
        daily_price: DailyPrice,
    ) -> Self {
        Self {
            id,
            user_id,
            user_name,
            game_name,
            game_slug,
            rented_at,
            daily_price,
        }
    }

    pub fn accrued_cost(&self, as_of: OffsetDateTime) -> RentalCost {
        accrued_cost(&self.rented_at, &self.daily_price, as_of)
    }
}
