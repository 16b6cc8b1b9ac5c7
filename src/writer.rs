//! Tree serializer.
//!
//! Emits one tag per line, indented by depth. The output is the inverse of
//! [`Reader::read`](crate::Reader::read) for any tree whose names, attribute
//! values and content stay inside the accepted grammar.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::structure::Structure;

/// Indentation unit written once per nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tabs,
    Spaces(usize),
}

/// Configuration options for writing
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    pub indent: Indent,
}

impl FormatConfig {
    /// Creates the indentation string for `depth` levels
    fn indentation(&self, depth: usize) -> String {
        match self.indent {
            Indent::Tabs => "\t".repeat(depth),
            Indent::Spaces(width) => " ".repeat(depth * width),
        }
    }
}

/// Writes [`Structure`] trees to a line sink
#[derive(Debug)]
pub struct Writer<W> {
    sink: W,
    config: FormatConfig,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, FormatConfig::default())
    }

    pub fn with_config(sink: W, config: FormatConfig) -> Self {
        Self { sink, config }
    }

    /// Serializes `root` and flushes the sink
    pub fn write(&mut self, root: &Structure) -> Result<()> {
        debug!(root = %root.key, "writing document");
        self.write_node(root, 0)?;
        self.sink.flush().map_err(ParseError::write_failure)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_node(&mut self, node: &Structure, depth: usize) -> Result<()> {
        warn_if_lossy(node);

        let indent = self.config.indentation(depth);
        let open = opening_tag(node);
        let single_line = !node.content.contains('\n');

        if node.childs.is_empty() && single_line {
            return self.line(format_args!(
                "{indent}{open}{}</{}>",
                node.content, node.key
            ));
        }

        self.line(format_args!("{indent}{open}"))?;
        if !node.content.is_empty() {
            let inner = self.config.indentation(depth + 1);
            for run in node.content.split('\n') {
                self.line(format_args!("{inner}{run}"))?;
            }
        }
        for child in &node.childs {
            self.write_node(child, depth + 1)?;
        }
        self.line(format_args!("{indent}</{}>", node.key))
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.sink, "{args}").map_err(ParseError::write_failure)
    }
}

fn opening_tag(node: &Structure) -> String {
    let mut tag = format!("<{}", node.key);
    for (name, value) in &node.attributes {
        tag.push_str(&format!(" {name}=\"{value}\""));
    }
    tag.push('>');
    tag
}

/// Logs content that the reader would not give back unchanged
fn warn_if_lossy(node: &Structure) {
    for issue in lossy_parts(node) {
        warn!(tag = %node.key, "{issue}");
    }
}

/// Describes each part of `node` that does not survive a write then read
fn lossy_parts(node: &Structure) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if node.attributes.values().any(|value| value.contains('"')) {
        issues.push("attribute value contains a double quote");
    }
    if node
        .attributes
        .values()
        .any(|value| value.contains(['\n', '\r']))
    {
        issues.push("attribute value contains a line terminator and will split the tag");
    }
    if node.content.contains('<') {
        issues.push("content contains `<` and will be read back as markup");
    }
    if node.content.contains('\r') {
        issues.push("content contains a carriage return that will be dropped");
    }
    if !node.content.is_empty()
        && node
            .content
            .split('\n')
            .any(|run| run.is_empty() || run.starts_with([' ', '\t']))
    {
        issues.push("content line is empty or indented and will be normalized");
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &Structure, config: FormatConfig) -> String {
        let mut writer = Writer::with_config(Vec::new(), config);
        writer.write(node).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_element_on_one_line() {
        let node = Structure::new("tag")
            .with_attribute("a", "1")
            .with_attribute("b", "two");
        assert_eq!(
            render(&node, FormatConfig::default()),
            "<tag a=\"1\" b=\"two\"></tag>\n"
        );
    }

    #[test]
    fn test_nested_with_tabs() {
        let node = Structure::new("root").with_child(Structure::new("child").with_content("hello"));
        assert_eq!(
            render(&node, FormatConfig::default()),
            "<root>\n\t<child>hello</child>\n</root>\n"
        );
    }

    #[test]
    fn test_content_and_children_with_spaces() {
        let node = Structure::new("p")
            .with_content("first\nsecond")
            .with_child(Structure::new("b"));
        let config = FormatConfig {
            indent: Indent::Spaces(2),
        };
        assert_eq!(
            render(&node, config),
            "<p>\n  first\n  second\n  <b></b>\n</p>\n"
        );
    }

    #[test]
    fn test_grammar_safe_node_is_not_lossy() {
        let node = Structure::new("item")
            .with_attribute("expr", "a = b > c")
            .with_content("first\nsecond");
        assert!(lossy_parts(&node).is_empty());
    }

    #[test]
    fn test_line_terminator_in_attribute_is_lossy() {
        let node = Structure::new("a").with_attribute("k", "line1\nline2");
        assert_eq!(
            lossy_parts(&node),
            vec!["attribute value contains a line terminator and will split the tag"]
        );
        assert_eq!(
            render(&node, FormatConfig::default()),
            "<a k=\"line1\nline2\"></a>\n"
        );
        assert!(crate::from_str(&render(&node, FormatConfig::default())).is_err());

        let node = Structure::new("a").with_attribute("k", "x\ry");
        assert_eq!(lossy_parts(&node).len(), 1);
    }

    #[test]
    fn test_carriage_return_in_content_is_lossy() {
        let node = Structure::new("a").with_content("x\r\ny");
        assert_eq!(
            lossy_parts(&node),
            vec!["content contains a carriage return that will be dropped"]
        );
        let read = crate::from_str(&render(&node, FormatConfig::default())).unwrap();
        assert_eq!(read.content, "x\ny");
    }
}
