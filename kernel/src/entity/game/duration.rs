use serde::{Deserialize, Serialize};

/// Advertised play time in minutes. Either bound may be unknown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    min: Option<i32>,
    max: Option<i32>,
}

impl DurationRange {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Option<i32> {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }
}
