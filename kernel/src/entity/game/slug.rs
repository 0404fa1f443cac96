use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Public identifier of a game, used in URLs instead of the raw id.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GameSlug(String);

impl GameSlug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }
}
