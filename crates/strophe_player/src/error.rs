//! Playback error types

use strophe_surface::SurfaceError;
use thiserror::Error;

/// Errors that terminate an in-flight playback
///
/// Nothing is swallowed or retried; every failure surfaces to the caller of
/// the playback operation.
#[derive(Error, Debug)]
pub enum PlayError {
    /// The output surface rejected a node
    #[error("output surface failure: {0}")]
    Surface(#[from] SurfaceError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayError>;
