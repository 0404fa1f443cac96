use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GameName(String);

impl GameName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
