//! Errors for parsing user-facing names.

use thiserror::Error;

/// A ranking property or sort order name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error("Unknown sort order '{0}' (expected 'ascending' or 'descending')")]
    UnknownOrder(String),
}
