use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Cafeterias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CafeteriaId(pub u32);

impl From<u32> for CafeteriaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CafeteriaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cafeteria_{}", self.0)
    }
}

/// A cafeteria on campus. Reference data for the order workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafeteria {
    pub id: CafeteriaId,
    pub name: String,
    pub location: String,
    pub is_open: bool,
}

/// Payload for creating a new cafeteria.
#[derive(Debug, Clone)]
pub struct CafeteriaCreate {
    pub name: String,
    pub location: String,
    pub is_open: bool,
}

impl CafeteriaCreate {
    /// An open cafeteria at `location`.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            is_open: true,
        }
    }
}
