mod id;

pub use self::id::*;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::GameId;

/// One physical copy of a board game. `is_rented` is the single source of
/// truth for availability and must stay consistent with the existence of an
/// open rental referencing this copy.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Inventory {
    id: InventoryId,
    game_id: GameId,
    is_rented: bool,
}

impl Inventory {
    pub fn new(id: InventoryId, game_id: GameId, is_rented: bool) -> Self {
        Self {
            id,
            game_id,
            is_rented,
        }
    }
}
