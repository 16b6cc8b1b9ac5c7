//! Cursor over the current line

use crate::error::{ParseError, ParseErrorKind};

/// Position inside one raw line, with line/column tracking for errors
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `input` starting at byte offset `pos`
    pub fn new(input: &'a str, pos: usize, line: usize) -> Self {
        Self {
            input,
            pos: pos.min(input.len()),
            line,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at byte ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input
            .as_bytes()
            .get(self.pos.saturating_add(ahead))
            .copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    pub fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.input.len());
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check whether the unconsumed input starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Skip spaces and tabs
    pub fn skip_blanks(&mut self) {
        while matches!(self.current(), Some(b' ' | b'\t')) {
            self.advance();
        }
    }

    /// Advance while `pred` holds, returning the consumed slice
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.current().is_some_and(&pred) {
            self.advance();
        }
        self.slice_from(start)
    }

    /// Check if at end of line
    pub fn is_eol(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining input
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Get current byte offset
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Rewind to an offset recorded earlier
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Get slice from start to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current position
    pub fn column(&self) -> usize {
        self.pos + 1
    }

    /// Build an error located at the current position
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        self.locate(ParseError::new(kind))
    }

    /// Attach the current position and line to an error raised elsewhere
    pub fn locate(&self, err: ParseError) -> ParseError {
        err.with_location(self.line, self.column())
            .with_context(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new("hello", 0, 1);
        assert_eq!(cursor.current(), Some(b'h'));
        assert_eq!(cursor.peek(1), Some(b'e'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'e'));
    }

    #[test]
    fn test_cursor_starts_at_offset() {
        let cursor = Cursor::new("<a>text", 3, 2);
        assert_eq!(cursor.remaining(), "text");
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_cursor_blanks() {
        let mut cursor = Cursor::new(" \t hello ", 0, 1);
        cursor.skip_blanks();
        assert_eq!(cursor.remaining(), "hello ");
    }

    #[test]
    fn test_cursor_take_while_and_reset() {
        let mut cursor = Cursor::new("name=value", 0, 1);
        let start = cursor.pos();
        assert_eq!(cursor.take_while(|b| b != b'='), "name");
        assert!(cursor.consume(b'='));
        cursor.reset(start);
        assert_eq!(cursor.remaining(), "name=value");
    }

    #[test]
    fn test_cursor_eol() {
        let mut cursor = Cursor::new("ab", 0, 1);
        cursor.advance_by(5);
        assert!(cursor.is_eol());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_error_here_carries_location() {
        let mut cursor = Cursor::new("<a b>", 0, 4);
        cursor.advance_by(3);
        let err = cursor.error_here(ParseErrorKind::MalformedAttribute("b".to_string()));
        let loc = err.location().unwrap();
        assert_eq!((loc.line, loc.column), (4, 4));
        assert_eq!(err.context(), Some("<a b>"));
    }
}
