//! Recursive-descent tree builder.
//!
//! [`Reader::read`] parses one document from a line source:
//! - Blank lines and leading indentation are insignificant
//! - Several tags may share a line, but an opening tag must end on its line
//! - Every opening tag must be closed by a matching, correctly nested tag
//! - Text inside a tag is collected into `content`; separate runs are
//!   joined with `\n`

use std::io::BufRead;

use tracing::{debug, trace};

use super::config::{ParserConfig, ParsingContext};
use super::cursor::Cursor;
use super::lines::LineBuffer;
use super::scanner;
use super::stack::TagStack;
use crate::error::{ParseError, ParseErrorKind, Result};
use crate::structure::Structure;

/// Reads [`Structure`] trees from a line source.
///
/// A reader owns the tag stack used to validate nesting, so one reader
/// runs one `read` at a time.
#[derive(Debug)]
pub struct Reader<R> {
    lines: LineBuffer<R>,
    stack: TagStack,
    config: ParserConfig,
    context: ParsingContext,
    last: Option<Structure>,
}

impl<R: BufRead> Reader<R> {
    /// Creates a reader with the default limits
    pub fn new(source: R) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: R, config: ParserConfig) -> Self {
        Self {
            lines: LineBuffer::new(source),
            stack: TagStack::new(),
            config,
            context: ParsingContext::new(),
            last: None,
        }
    }

    /// Parses the document held by the source
    ///
    /// # Returns
    /// - Ok(Structure) for the root element
    /// - Err if the input is blank, malformed, or leaves a tag open
    pub fn read(&mut self) -> Result<Structure> {
        self.stack.clear();
        self.context = ParsingContext::new();
        self.last = None;
        debug!(line = self.lines.line_number(), "reading document");

        let root = self.read_document()?;

        debug!(
            root = %root.key,
            lines = self.lines.line_number(),
            "document read"
        );
        self.last = Some(root.clone());
        Ok(root)
    }

    /// The tree produced by the most recent successful `read`
    pub fn last(&self) -> Option<&Structure> {
        self.last.as_ref()
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }

    fn read_document(&mut self) -> Result<Structure> {
        if !self.next_token()? {
            return Err(ParseError::new(ParseErrorKind::EmptyLine)
                .with_location(self.lines.line_number().max(1), 1));
        }

        let mut cursor = Cursor::new(
            self.lines.raw(),
            self.lines.pos(),
            self.lines.line_number(),
        );
        if !scanner::is_opening_tag(&cursor) {
            // the stack is empty here, so a closing tag is always rejected
            scanner::is_closing_tag(&mut cursor, &self.stack)?;
            return Err(cursor.error_here(ParseErrorKind::MalformedTag(
                "expected an opening tag".to_string(),
            )));
        }

        let root = self.read_node()?;

        if self.next_token()? {
            let cursor = Cursor::new(
                self.lines.raw(),
                self.lines.pos(),
                self.lines.line_number(),
            );
            return Err(cursor.error_here(ParseErrorKind::TrailingContent));
        }

        debug_assert!(self.stack.is_empty());

        Ok(root)
    }

    /// Parses one element starting at its opening tag, children included
    fn read_node(&mut self) -> Result<Structure> {
        let mut node = Structure::default();

        let mut cursor = Cursor::new(
            self.lines.raw(),
            self.lines.pos(),
            self.lines.line_number(),
        );
        let (open_line, open_column) = (cursor.line(), cursor.column());

        let bare = scanner::extract_key(&mut cursor, &mut node, &mut self.stack)?;
        self.context
            .enter_nested(&self.config)
            .map_err(|e| cursor.locate(e))?;
        if !bare {
            while scanner::has_attributes(&cursor) {
                scanner::extract_attribute(&mut cursor, &mut node)?;
                self.config
                    .validate_attribute_count(node.attributes.len())
                    .map_err(|e| cursor.locate(e))?;
            }
        }
        let self_closing = scanner::finish_opening_tag(&mut cursor, &node.key)?;
        let pos = cursor.pos();
        self.lines.set_pos(pos);
        trace!(tag = %node.key, line = open_line, "opened tag");

        if self_closing {
            self.close(&node.key);
            return Ok(node);
        }

        loop {
            if !self.next_token()? {
                return Err(ParseError::new(ParseErrorKind::UnterminatedTag {
                    tag: node.key.clone(),
                })
                .with_location(open_line, open_column));
            }

            let mut cursor = Cursor::new(
                self.lines.raw(),
                self.lines.pos(),
                self.lines.line_number(),
            );
            if scanner::is_closing_tag(&mut cursor, &self.stack)? {
                let pos = cursor.pos();
                self.lines.set_pos(pos);
                self.close(&node.key);
                return Ok(node);
            }

            if scanner::is_opening_tag(&cursor) {
                let child = self.read_node()?;
                node.childs.push(child);
            } else {
                let run = scanner::text_run(&mut cursor);
                trace!(tag = %node.key, run, "text");
                node.push_content(run);
                let pos = cursor.pos();
                self.lines.set_pos(pos);
            }
        }
    }

    fn close(&mut self, key: &str) {
        let closed = self.stack.pop();
        debug_assert_eq!(closed, key);
        self.context.exit_nested();
        trace!(tag = %closed, "closed tag");
    }

    /// Moves to the next non-blank input, loading lines as needed.
    ///
    /// Returns `Ok(false)` at end of input.
    fn next_token(&mut self) -> Result<bool> {
        loop {
            let mut cursor = Cursor::new(
                self.lines.raw(),
                self.lines.pos(),
                self.lines.line_number(),
            );
            if scanner::skip_if_blank(&mut cursor).is_ok() {
                let pos = cursor.pos();
                self.lines.set_pos(pos);
                return Ok(true);
            }
            if !self.lines.next_line(&self.config)? {
                return Ok(false);
            }
        }
    }
}
