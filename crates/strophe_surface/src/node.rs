//! Renderable node types
//!
//! A surface accepts exactly two kinds of nodes: text-bearing nodes with
//! settable style properties, and bare line terminators.

use strophe_core::{EnterTransition, StyleMap};

/// A text-bearing renderable node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    content: String,
    style: StyleMap,
    enter_transition: Option<EnterTransition>,
}

impl TextNode {
    /// Create a text node with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: StyleMap::new(),
            enter_transition: None,
        }
    }

    /// Set a style property by name
    pub fn set_style_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.style.set(name, value);
    }

    /// Attach an entrance transition hint
    pub fn set_enter_transition(&mut self, transition: EnterTransition) {
        self.enter_transition = Some(transition);
    }

    /// Get the text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the applied style properties
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// Get the entrance transition hint, if any
    pub fn enter_transition(&self) -> Option<EnterTransition> {
        self.enter_transition
    }
}

/// A node a surface can accept
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceNode {
    /// Visible text with optional styling
    Text(TextNode),
    /// A line terminator; carries no content and no style
    LineBreak,
}

impl SurfaceNode {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextNode::new(content))
    }

    /// Create a line terminator node
    pub fn line_break() -> Self {
        Self::LineBreak
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is a line terminator
    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }

    /// Get the inner text node, if any
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(node) => Some(node),
            Self::LineBreak => None,
        }
    }
}

impl From<TextNode> for SurfaceNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_styling() {
        let mut node = TextNode::new("alight");
        node.set_style_property("opacity", "0.5");
        node.set_style_property("font-family", "Roboto");
        assert_eq!(node.content(), "alight");
        assert_eq!(node.style().get("opacity"), Some("0.5"));
        assert_eq!(node.style().len(), 2);
    }

    #[test]
    fn test_line_break_has_no_text() {
        let node = SurfaceNode::line_break();
        assert!(node.is_line_break());
        assert!(!node.is_text());
        assert!(node.as_text().is_none());
    }

    #[test]
    fn test_transition_hint() {
        let mut node = TextNode::new("here");
        assert_eq!(node.enter_transition(), None);
        node.set_enter_transition(EnterTransition::Fade);
        assert_eq!(node.enter_transition(), Some(EnterTransition::Fade));
    }
}
