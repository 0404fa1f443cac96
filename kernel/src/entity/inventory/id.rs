use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Sequential copy identifier. The ledger picks the lowest available id when
/// several copies qualify, which keeps the tie-break deterministic.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct InventoryId(i64);

impl InventoryId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
