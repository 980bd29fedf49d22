//! Append-only output surfaces

use crate::error::{Result, SurfaceError};
use crate::node::SurfaceNode;

/// An append-only container for rendered nodes
///
/// The playback engine is the sole writer during a run; it depends on
/// nothing beyond ordered appends — no layout, measurement, or removal.
pub trait Surface {
    /// Append a node after everything appended so far
    fn append(&mut self, node: SurfaceNode) -> Result<()>;
}

/// An in-memory surface that accumulates nodes in order
///
/// Backs tests and terminal demos. `detach` models the collaborator
/// becoming unavailable mid-run: every later append fails.
#[derive(Debug, Default)]
pub struct BufferSurface {
    nodes: Vec<SurfaceNode>,
    detached: bool,
}

impl BufferSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the appended nodes in order
    pub fn nodes(&self) -> &[SurfaceNode] {
        &self.nodes
    }

    /// Get the number of appended nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stop accepting appends
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Render the accumulated nodes as plain text, one `\n` per terminator
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                SurfaceNode::Text(text) => out.push_str(text.content()),
                SurfaceNode::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

impl Surface for BufferSurface {
    fn append(&mut self, node: SurfaceNode) -> Result<()> {
        if self.detached {
            return Err(SurfaceError::Detached);
        }
        self.nodes.push(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_preserve_order() {
        let mut surface = BufferSurface::new();
        surface.append(SurfaceNode::text("x")).unwrap();
        surface.append(SurfaceNode::line_break()).unwrap();
        surface.append(SurfaceNode::text("y")).unwrap();

        assert_eq!(surface.len(), 3);
        assert!(surface.nodes()[0].is_text());
        assert!(surface.nodes()[1].is_line_break());
        assert_eq!(surface.nodes()[2].as_text().unwrap().content(), "y");
    }

    #[test]
    fn test_text_rendering() {
        let mut surface = BufferSurface::new();
        surface.append(SurfaceNode::text("here i sit")).unwrap();
        surface.append(SurfaceNode::line_break()).unwrap();
        surface.append(SurfaceNode::text("once scared")).unwrap();

        assert_eq!(surface.text(), "here i sit\nonce scared");
    }

    #[test]
    fn test_detached_surface_rejects_appends() {
        let mut surface = BufferSurface::new();
        surface.append(SurfaceNode::text("kept")).unwrap();
        surface.detach();

        let err = surface.append(SurfaceNode::text("dropped")).unwrap_err();
        assert!(matches!(err, SurfaceError::Detached));
        assert_eq!(surface.len(), 1);
    }
}
