use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CategoryTags(Vec<String>);

impl CategoryTags {
    pub fn new(tags: impl Into<Vec<String>>) -> Self {
        Self(tags.into())
    }
}
