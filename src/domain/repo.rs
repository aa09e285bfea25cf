//! Repository and branch references on a VCS provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

impl Repo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A named git ref
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_display() {
        assert_eq!(
            Repo::new("scala-steward-org", "scala-steward").to_string(),
            "scala-steward-org/scala-steward"
        );
    }

    #[test]
    fn test_branch_display() {
        assert_eq!(
            Branch::new("update/cats-core-2.10.0").to_string(),
            "update/cats-core-2.10.0"
        );
    }
}
