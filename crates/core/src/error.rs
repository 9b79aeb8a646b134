//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a transition was refused in the aggregate's current state.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InvalidStateKind {
    /// A driver is already attached to the order.
    #[error("a driver is already assigned to the order")]
    DriverAlreadyAssigned,

    /// The ride has already started or finished.
    #[error("the ride has already started")]
    RideAlreadyStarted,

    /// The operation requires an attached driver.
    #[error("no driver is assigned to the order")]
    NoDriverAssigned,

    /// Finishing requires the ride to be in progress.
    #[error("the ride is not in progress")]
    RideNotInProgress,
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (invalid
/// transitions, failed lookups, defects). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The operation is not allowed in the current state.
    #[error("invalid state: {0}")]
    InvalidState(InvalidStateKind),

    /// A requested resource was not found (e.g. unknown driver id).
    #[error("not found: {0}")]
    NotFound(String),

    /// A value outside the known set was encountered. Signals a programming
    /// defect rather than a user error.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_state(kind: InvalidStateKind) -> Self {
        Self::InvalidState(kind)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns the refusal reason if this is an `InvalidState` error.
    pub fn invalid_state_kind(&self) -> Option<InvalidStateKind> {
        match self {
            Self::InvalidState(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<InvalidStateKind> for DomainError {
    fn from(kind: InvalidStateKind) -> Self {
        Self::InvalidState(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_message_includes_reason() {
        let err = DomainError::invalid_state(InvalidStateKind::RideNotInProgress);
        assert_eq!(err.to_string(), "invalid state: the ride is not in progress");
        assert_eq!(err.invalid_state_kind(), Some(InvalidStateKind::RideNotInProgress));
    }

    #[test]
    fn not_found_has_no_invalid_state_kind() {
        let err = DomainError::not_found("unknown driver id 99");
        assert_eq!(err.to_string(), "not found: unknown driver id 99");
        assert_eq!(err.invalid_state_kind(), None);
    }
}
