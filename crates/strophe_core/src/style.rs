//! Style mappings and entrance transition hints

use indexmap::IndexMap;

/// Entrance effect hint attached to rendered text nodes
///
/// Purely descriptive metadata for the styling layer; playback timing never
/// consults it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnterTransition {
    /// Fade in from transparent
    Fade,
    /// Slide in from the left
    LeftSlide,
    /// Slide in from below
    BottomSlide,
}

/// An insertion-ordered mapping of style property names to values
///
/// Properties are applied to rendered text nodes in the order they were set.
/// An empty value is treated as absent at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    props: IndexMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    /// Builder: set a property
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a property value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Get the number of properties
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if the map has no properties
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// Per-entry style override: maps an entry index to a style mapping
///
/// When a leaf defines one, it takes precedence over the leaf's static style
/// for every entry of that leaf.
pub type StyleFn = Box<dyn Fn(usize) -> StyleMap + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let style = StyleMap::new()
            .with("font-family", "Roboto")
            .with("opacity", "0.8")
            .with("color", "teal");

        let names: Vec<&str> = style.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["font-family", "opacity", "color"]);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut style = StyleMap::new();
        style.set("color", "teal");
        style.set("color", "plum");
        assert_eq!(style.get("color"), Some("plum"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_empty_map() {
        let style = StyleMap::new();
        assert!(style.is_empty());
        assert_eq!(style.get("color"), None);
    }
}
