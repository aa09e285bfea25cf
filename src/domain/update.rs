//! Version bump of a single dependency

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of versions for one dependency: the version in use and the one to move to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Version currently in use
    pub current_version: String,
    /// Version proposed by the update
    pub next_version: String,
}

impl Update {
    /// Creates a new update
    pub fn new(current_version: impl Into<String>, next_version: impl Into<String>) -> Self {
        Self {
            current_version: current_version.into(),
            next_version: next_version.into(),
        }
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.current_version, self.next_version)
    }
}
