mod cost;
mod id;
mod rented_at;
mod returned_at;
mod summary;

pub use self::{cost::*, id::*, rented_at::*, returned_at::*, summary::*};
use destructure::{Destructure, Mutation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::References;

use crate::entity::{DailyPrice, InventoryId, UserId};

/// One rental transaction. `returned_at == None` means the rental is open and
/// the referenced copy is out. At most one open rental may reference a given
/// copy; the ledger enforces this with a transactional check-and-flip.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Rental {
    id: RentalId,
    user_id: UserId,
    inventory_id: InventoryId,
    rented_at: RentedAt,
    returned_at: Option<ReturnedAt>,
    total_cost: RentalCost,
}

impl Rental {
    pub fn new(
        id: RentalId,
        user_id: UserId,
        inventory_id: InventoryId,
        rented_at: RentedAt,
        returned_at: Option<ReturnedAt>,
        total_cost: RentalCost,
    ) -> Self {
        Self {
            id,
            user_id,
            inventory_id,
            rented_at,
            returned_at,
            total_cost,
        }
    }

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    /// Finalizes the rental: stamps the return time and recomputes the total
    /// from the number of billable days. Does not touch inventory state.
    pub fn close(self, daily_price: &DailyPrice, returned_at: ReturnedAt) -> Self {
        let total = accrued_cost(&self.rented_at, daily_price, *returned_at.as_ref());
        self.reconstruct(|rental| {
            rental.returned_at = Some(returned_at);
            rental.total_cost = total;
        })
    }
}

/// A rental about to be inserted. The id is assigned by the database.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewRental {
    user_id: UserId,
    inventory_id: InventoryId,
    rented_at: RentedAt,
    total_cost: RentalCost,
}

impl NewRental {
    pub fn new(
        user_id: UserId,
        inventory_id: InventoryId,
        rented_at: RentedAt,
        total_cost: RentalCost,
    ) -> Self {
        Self {
            user_id,
            inventory_id,
            rented_at,
            total_cost,
        }
    }
}

/// Every started day is billed in full, and a rental returned the moment it
/// started still pays for one day.
pub fn billable_days(rented_at: &RentedAt, as_of: OffsetDateTime) -> i64 {
    let elapsed = as_of - *rented_at.as_ref();
    elapsed.whole_days().max(0) + 1
}

pub fn accrued_cost(rented_at: &RentedAt, daily_price: &DailyPrice, as_of: OffsetDateTime) -> RentalCost {
    let days = Decimal::from(billable_days(rented_at, as_of));
    RentalCost::new(days * *daily_price.as_ref())
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use time::ext::NumericalDuration;
    use time::OffsetDateTime;

    use crate::entity::{accrued_cost, billable_days, DailyPrice, RentedAt};

    #[test]
    fn same_instant_charges_one_day() {
        let start = OffsetDateTime::now_utc();
        let rented_at = RentedAt::new(start);
        assert_eq!(billable_days(&rented_at, start), 1);
    }

    #[test]
    fn partial_days_round_up() {
        let start = OffsetDateTime::now_utc();
        let rented_at = RentedAt::new(start);
        assert_eq!(billable_days(&rented_at, start + 25.hours()), 2);
        assert_eq!(billable_days(&rented_at, start + 23.hours()), 1);
        assert_eq!(billable_days(&rented_at, start + 49.hours()), 3);
    }

    #[test]
    fn clock_skew_never_bills_less_than_one_day() {
        let start = OffsetDateTime::now_utc();
        let rented_at = RentedAt::new(start);
        assert_eq!(billable_days(&rented_at, start - 2.hours()), 1);
    }

    #[test]
    fn accrued_cost_is_days_times_daily_price() {
        let start = OffsetDateTime::now_utc();
        let rented_at = RentedAt::new(start);
        let price = DailyPrice::new(Decimal::new(1050, 2)); // 10.50
        let cost = accrued_cost(&rented_at, &price, start + 25.hours());
        assert_eq!(*cost.as_ref(), Decimal::new(2100, 2));
    }
}
