use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GameDescription(String);

impl GameDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
