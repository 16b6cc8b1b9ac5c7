//! In-memory tree produced by the reader and consumed by the writer

use indexmap::IndexMap;

/// One tag of a document: its name, attributes, text content and children.
///
/// Attribute equality ignores insertion order; child order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    /// The name of the tag
    pub key: String,
    /// Attribute name to value
    pub attributes: IndexMap<String, String>,
    /// Text directly inside the tag, excluding child tags
    pub content: String,
    /// Child elements in document order
    pub childs: Vec<Structure>,
}

impl Structure {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.childs.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First direct child with the given key
    pub fn child(&self, key: &str) -> Option<&Self> {
        self.childs.iter().find(|child| child.key == key)
    }

    pub fn is_leaf(&self) -> bool {
        self.childs.is_empty()
    }

    /// Appends a text run, separating runs with a newline
    pub(crate) fn push_content(&mut self, run: &str) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(run);
    }
}
