//! The segment animation config tree
//!
//! A `Segment` describes what to reveal and how to pace it. It is either a
//! leaf holding renderable entries or a parent holding ordered children —
//! the two shapes are separate enum variants, so a node with both or neither
//! cannot be constructed. Trees are built once, up front, and are read-only
//! during playback.

use std::fmt;

use crate::entry::Entry;
use crate::style::{EnterTransition, StyleFn, StyleMap};

/// A leaf node: ordered renderable entries plus pacing and style fields
pub struct LeafSegment {
    values: Vec<Entry>,
    before_all_delay_ms: u32,
    before_each_delay_ms: u32,
    enter_transition: Option<EnterTransition>,
    style: Option<StyleMap>,
    get_style: Option<StyleFn>,
}

impl LeafSegment {
    /// Create a leaf from its renderable entries
    pub fn new<I, E>(values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            before_all_delay_ms: 0,
            before_each_delay_ms: 0,
            enter_transition: None,
            style: None,
            get_style: None,
        }
    }

    /// Builder: delay applied once before the first entry, in milliseconds
    pub fn with_before_all_delay(mut self, ms: u32) -> Self {
        self.before_all_delay_ms = ms;
        self
    }

    /// Builder: delay applied before every entry, in milliseconds
    pub fn with_before_each_delay(mut self, ms: u32) -> Self {
        self.before_each_delay_ms = ms;
        self
    }

    /// Builder: entrance transition hint for this leaf's rendered text
    pub fn with_enter_transition(mut self, transition: EnterTransition) -> Self {
        self.enter_transition = Some(transition);
        self
    }

    /// Builder: static style applied to every entry of this leaf
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Builder: per-entry style override
    ///
    /// Takes precedence over `with_style` for every entry of this leaf.
    pub fn with_get_style<F>(mut self, get_style: F) -> Self
    where
        F: Fn(usize) -> StyleMap + Send + Sync + 'static,
    {
        self.get_style = Some(Box::new(get_style));
        self
    }

    /// Get the ordered entries
    pub fn values(&self) -> &[Entry] {
        &self.values
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the leaf has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the delay applied once before the first entry, in milliseconds
    pub fn before_all_delay_ms(&self) -> u32 {
        self.before_all_delay_ms
    }

    /// Get the delay applied before every entry, in milliseconds
    pub fn before_each_delay_ms(&self) -> u32 {
        self.before_each_delay_ms
    }

    /// Get the entrance transition hint, if any
    pub fn enter_transition(&self) -> Option<EnterTransition> {
        self.enter_transition
    }

    /// Resolve the effective style for the entry at `index`
    ///
    /// The per-entry override wins over the static style; with neither set
    /// the result is empty.
    pub fn style_for(&self, index: usize) -> StyleMap {
        if let Some(get_style) = &self.get_style {
            return get_style(index);
        }
        self.style.clone().unwrap_or_default()
    }
}

impl fmt::Debug for LeafSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafSegment")
            .field("values", &self.values)
            .field("before_all_delay_ms", &self.before_all_delay_ms)
            .field("before_each_delay_ms", &self.before_each_delay_ms)
            .field("enter_transition", &self.enter_transition)
            .field("style", &self.style)
            .field("get_style", &self.get_style.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A node in the animation config tree
///
/// Exactly one of two shapes: a leaf with entries, or a parent with ordered
/// children and no entries of its own.
#[derive(Debug)]
pub enum Segment {
    /// Holds renderable entries and pacing
    Leaf(LeafSegment),
    /// Holds ordered child segments
    Parent(Vec<Segment>),
}

impl Segment {
    /// Create a leaf segment
    pub fn leaf(leaf: LeafSegment) -> Self {
        Self::Leaf(leaf)
    }

    /// Create a parent segment from ordered children
    pub fn parent(children: Vec<Segment>) -> Self {
        Self::Parent(children)
    }

    /// Check if this node holds entries directly
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Check if this node holds child segments
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent(_))
    }

    /// Total number of renderable entries across the whole subtree
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.len(),
            Self::Parent(children) => children.iter().map(Segment::entry_count).sum(),
        }
    }
}

impl From<LeafSegment> for Segment {
    fn from(leaf: LeafSegment) -> Self {
        Self::Leaf(leaf)
    }
}
