use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// The set of player counts a game supports, e.g. `[2, 3, 4]`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PlayerCounts(Vec<i32>);

impl PlayerCounts {
    pub fn new(counts: impl Into<Vec<i32>>) -> Self {
        Self(counts.into())
    }

    pub fn supports(&self, players: i32) -> bool {
        self.0.contains(&players)
    }
}
