use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Account-wide tag registry, shared between the account and the column
/// values that resolve tag names against it. Replaced wholesale on every
/// account pull.
pub type SharedTags = Arc<RwLock<Vec<Tag>>>;

/// An account-wide label usable by tag-typed columns. Immutable snapshot of
/// remote state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl Tag {
    pub fn new(id: u64, name: String, color: String) -> Self {
        Self { id, name, color }
    }
}
