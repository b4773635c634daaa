//! Data access error types.

use thiserror::Error;

/// Errors surfaced by a catalog provider.
///
/// A failed call is rejected to the caller; the calling page shows the
/// message and the user retries. The provider never retries on its own.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Get, update, or delete was called with an unknown id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The backing transport failed (network client implementations).
    #[error("Provider transport error: {0}")]
    Transport(String),
}
