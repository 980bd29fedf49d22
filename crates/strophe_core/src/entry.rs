//! Renderable entries and break markers
//!
//! A leaf segment's values are a flat sequence of `Entry` items: literal
//! text runs interleaved with structural break markers. Breaks are a closed
//! two-case enum, so no ordinary string value can ever be mistaken for one.

/// The kind of structural break an entry denotes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// Move to the next line
    Line,
    /// Move to the next stanza
    Stanza,
}

/// A single renderable entry in a leaf segment
///
/// Break entries are never rendered as text; playback commits them as
/// line-terminator nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A literal text run
    Text(String),
    /// A structural break
    Break(BreakKind),
}

impl Entry {
    /// Create a text entry
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a line break entry
    pub fn line_break() -> Self {
        Self::Break(BreakKind::Line)
    }

    /// Create a stanza break entry
    pub fn stanza_break() -> Self {
        Self::Break(BreakKind::Stanza)
    }

    /// Check if this entry is a break of either kind
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    /// Check if this entry is a line break
    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::Break(BreakKind::Line))
    }

    /// Check if this entry is a stanza break
    pub fn is_stanza_break(&self) -> bool {
        matches!(self, Self::Break(BreakKind::Stanza))
    }

    /// Get the text content, if this is a text entry
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Break(_) => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<BreakKind> for Entry {
    fn from(kind: BreakKind) -> Self {
        Self::Break(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_predicates() {
        let line = Entry::line_break();
        assert!(line.is_break());
        assert!(line.is_line_break());
        assert!(!line.is_stanza_break());

        let stanza = Entry::stanza_break();
        assert!(stanza.is_break());
        assert!(stanza.is_stanza_break());
        assert!(!stanza.is_line_break());
    }

    #[test]
    fn test_text_is_never_a_break() {
        // Text that happens to spell out a break name is still just text
        let entry = Entry::text("Line");
        assert!(!entry.is_break());
        assert!(!entry.is_line_break());
        assert!(!entry.is_stanza_break());
        assert_eq!(entry.as_text(), Some("Line"));
    }

    #[test]
    fn test_breaks_carry_no_text() {
        assert_eq!(Entry::line_break().as_text(), None);
        assert_eq!(Entry::stanza_break().as_text(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Entry::from("word"), Entry::text("word"));
        assert_eq!(Entry::from(BreakKind::Stanza), Entry::stanza_break());
    }
}
