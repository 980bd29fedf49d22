//! Strophe Surface
//!
//! The output side of a staged reveal: renderable node types and the
//! append-only `Surface` contract the playback engine writes to.
//!
//! - **Nodes**: text-bearing nodes with settable style properties, and bare
//!   line terminators
//! - **Surface trait**: ordered appends, nothing else
//! - **BufferSurface**: in-memory implementation for tests and demos

pub mod error;
pub mod node;
pub mod surface;

pub use error::SurfaceError;
pub use node::{SurfaceNode, TextNode};
pub use surface::{BufferSurface, Surface};
