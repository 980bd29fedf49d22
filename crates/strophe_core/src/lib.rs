//! Strophe Core
//!
//! The declarative data model for staged poem reveals:
//!
//! - **Entries**: text runs and structural break markers
//! - **Segments**: the recursive animation config tree — every node is a
//!   leaf with entries or a parent with children, never both
//! - **Styles**: insertion-ordered property maps with per-entry overrides
//! - **Presets**: ready-made trees for the bundled poem
//!
//! # Example
//!
//! ```rust
//! use strophe_core::{Entry, LeafSegment, Segment};
//!
//! let tree = Segment::parent(vec![
//!     LeafSegment::new(["here", "i", "sit"])
//!         .with_before_each_delay(800)
//!         .into(),
//!     LeafSegment::new([Entry::text("once scared, now curious."), Entry::line_break()])
//!         .with_before_all_delay(400)
//!         .into(),
//! ]);
//!
//! assert!(tree.is_parent());
//! assert_eq!(tree.entry_count(), 5);
//! ```

pub mod entry;
pub mod presets;
pub mod segment;
pub mod style;

pub use entry::{BreakKind, Entry};
pub use presets::RevealPreset;
pub use segment::{LeafSegment, Segment};
pub use style::{EnterTransition, StyleFn, StyleMap};
