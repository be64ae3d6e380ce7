//! Error types for the store layer.
//!
//! Only expected, recoverable conditions live here: a caller tried to add a
//! record whose key already exists, or referenced a key that does not.
//! Anything else is a programming error and should panic, not hide in this
//! enum.

use serde::{Deserialize, Serialize};

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Student,
    Subject,
    Selection,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::Student => "student",
            Entity::Subject => "subject",
            Entity::Selection => "selection",
        };
        f.write_str(name)
    }
}

/// Errors from store operations.
///
/// For selections the key is the rendered pair, e.g. `"S1/C1"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record with this key already exists.
    #[error("duplicate {entity} key: {key}")]
    DuplicateKey { entity: Entity, key: String },

    /// No record with this key exists.
    #[error("no {entity} found for key: {key}")]
    NotFound { entity: Entity, key: String },
}

impl Error {
    pub fn duplicate(entity: Entity, key: impl Into<String>) -> Self {
        Error::DuplicateKey {
            entity,
            key: key.into(),
        }
    }

    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = Error::duplicate(Entity::Student, "S1");
        assert_eq!(format!("{}", e), "duplicate student key: S1");

        let e = Error::not_found(Entity::Selection, "S1/C1");
        assert_eq!(format!("{}", e), "no selection found for key: S1/C1");
    }

    #[test]
    fn entity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Entity::Subject).unwrap(),
            serde_json::json!("subject")
        );
    }
}
