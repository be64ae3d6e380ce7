//! The structured failure value that crosses the process boundary.

use serde::{Deserialize, Serialize};

use crate::method::Method;

/// Machine-checkable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// A record with the given key already exists.
    DuplicateKey,
    /// No record with the given key exists.
    NotFound,
    /// The method name is not on the allow-list.
    MethodNotFound,
    /// The argument list could not be decoded for the named method.
    InvalidArguments,
    /// A fault inside the gateway itself. Presenters should treat this as
    /// a bug report, not a condition to handle.
    Internal,
}

/// An expected, recoverable failure, as seen by the untrusted side.
///
/// The presenter treats any failure as terminal for that call and may show
/// `description` to the user verbatim. Retrying without a state change will
/// deterministically fail again.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{description}")]
pub struct Failure {
    pub kind: FailureKind,
    pub description: String,
}

impl Failure {
    pub fn method_not_found(name: &str) -> Self {
        Failure {
            kind: FailureKind::MethodNotFound,
            description: format!("the method {} does not exist", name),
        }
    }

    pub fn invalid_arguments(method: Method, message: impl std::fmt::Display) -> Self {
        Failure {
            kind: FailureKind::InvalidArguments,
            description: format!("invalid arguments for {}: {}", method, message),
        }
    }

    pub(crate) fn internal(message: impl std::fmt::Display) -> Self {
        Failure {
            kind: FailureKind::Internal,
            description: format!("internal gateway error: {}", message),
        }
    }
}

impl From<roster_store::Error> for Failure {
    fn from(error: roster_store::Error) -> Self {
        let kind = match error {
            roster_store::Error::DuplicateKey { .. } => FailureKind::DuplicateKey,
            roster_store::Error::NotFound { .. } => FailureKind::NotFound,
        };
        Failure {
            kind,
            description: error.to_string(),
        }
    }
}
