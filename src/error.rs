//! Error types for the scan engine.

use thiserror::Error;

use crate::tag::TagType;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the engine can produce.
///
/// Inside a rung evaluation these are always recovered locally (see
/// [`crate::diagnostic`]) — an instruction handler that returns one of
/// these skips its side effects for this token and evaluation moves on
/// to the next one. The type exists so call boundaries that *do* want to
/// fail outright (tag-literal parsing during load) have something
/// concrete to propagate with `?`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Named tag absent where a read was required.
    #[error("tag '{name}' not found")]
    NotFound { name: String },

    /// Type of stored tag incompatible with the instruction's
    /// expectation.
    #[error("tag '{name}' has type {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: TagType,
        found: TagType,
    },

    /// Token too short, non-uppercase opcode, or unknown opcode.
    #[error("malformed token '{token}': {reason}")]
    MalformedToken { token: String, reason: &'static str },

    /// Missing comma-separated argument, or an empty param where one was
    /// required.
    #[error("{opcode} has malformed parameters '{params}': {reason}")]
    MalformedParams {
        opcode: String,
        params: String,
        reason: &'static str,
    },

    /// `BND` or `NXB` without a matching `BST`.
    #[error("branch stack underflow at {opcode} (rung {rung})")]
    StackUnderflow { opcode: &'static str, rung: u32 },
}
