//! Report error types.

use thiserror::Error;

use crate::domain::DomainError;

/// Errors surfaced while selecting a report or assembling its inputs.
///
/// The engine itself is total: every report function produces a result
/// for any input, including empty collections. Errors only arise at the
/// boundaries, when a selector or a stored row violates the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No report matches the requested selector.
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    /// A stored row carries a negative amount.
    #[error("Negative amount on {entity} id {id}")]
    NegativeAmount {
        /// Collection the offending row came from.
        entity: &'static str,
        /// Row id.
        id: i32,
    },

    /// A stored status or entry-kind string could not be decoded.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
