//! Line source staging for the reader

use std::io::{BufRead, Read};

use crate::error::{IoError, ParseError, ParseErrorKind, Result};
use crate::parser::config::ParserConfig;

/// Pulls lines from a [`BufRead`] and stages the current one.
///
/// `raw` holds the whole current line without its terminator. The working
/// stage is the unconsumed tail of `raw`, starting at `pos`.
#[derive(Debug)]
pub struct LineBuffer<R> {
    source: R,
    raw: String,
    pos: usize,
    line: usize,
    exhausted: bool,
}

impl<R: BufRead> LineBuffer<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            raw: String::new(),
            pos: 0,
            line: 0,
            exhausted: false,
        }
    }

    /// Loads the next line into the raw stage.
    ///
    /// Returns `Ok(false)` once the source is exhausted.
    pub fn next_line(&mut self, config: &ParserConfig) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }

        self.raw.clear();
        self.pos = 0;
        // room for the longest accepted line plus a "\r\n" terminator
        let limit = config.max_line_length.saturating_add(2);
        let mut bytes = Vec::new();
        let read = (&mut self.source)
            .take(u64::try_from(limit).unwrap_or(u64::MAX))
            .read_until(b'\n', &mut bytes)
            .map_err(ParseError::read_failure)?;
        if read == 0 {
            self.exhausted = true;
            return Ok(false);
        }

        self.line += 1;
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        config
            .validate_line_length(bytes.len())
            .map_err(|e| e.with_location(self.line, 1))?;
        self.raw = String::from_utf8(bytes).map_err(|e| {
            ParseError::new(ParseErrorKind::Io(IoError::ReadError(e.to_string())))
                .with_location(self.line, 1)
                .with_source(e)
        })?;
        Ok(true)
    }

    /// The whole current line
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The unconsumed tail of the current line
    pub fn working(&self) -> &str {
        self.raw.get(self.pos..).unwrap_or_default()
    }

    /// Byte offset of the working stage inside the raw line
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the working stage to `pos`, as left behind by a cursor
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.raw.len());
    }

    /// 1-based number of the current line, 0 before the first read
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}
