use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Denormalized cost figure kept on the rental for audit history.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalCost(Decimal);

impl RentalCost {
    pub fn new(cost: impl Into<Decimal>) -> Self {
        Self(cost.into())
    }
}
