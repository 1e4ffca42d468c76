//! Frontend Models
//!
//! Data structures matching the items endpoint response.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
///
/// `name` doubles as the rendering key of the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub img: String,
}

#[cfg(test)]
impl Item {
    pub fn new(name: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: img.into(),
        }
    }
}
