use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// File name of the game's catalog image, resolved by the presentation layer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ImageName(String);

impl ImageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
