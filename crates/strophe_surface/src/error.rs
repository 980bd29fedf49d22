//! Surface error types

use thiserror::Error;

/// Output-surface errors
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The surface has been detached and no longer accepts nodes
    #[error("surface is detached and no longer accepts nodes")]
    Detached,

    /// A backend rejected the append
    #[error("surface backend failure: {0}")]
    Backend(String),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
