//! Error handling types for the reader and writer
//!
//! Every failure surfaces as a [`ParseError`]. Reader errors carry the line and
//! column where the problem was found and the offending raw line as context.

use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Main error type for read and write operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn StdError + Send + Sync>>,
    /// The raw line the error was found on
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in bytes)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A line was required but the input was blank or exhausted
    #[error("expected a tag, found an empty line")]
    EmptyLine,
    /// A closing tag that does not match the innermost open tag
    #[error("{}", unexpected_closing_message(.expected, .found))]
    UnexpectedClosingTag {
        expected: Option<String>,
        found: String,
    },
    /// Input ended while a tag was still open
    #[error("tag <{tag}> is never closed")]
    UnterminatedTag { tag: String },
    /// An attribute list that is not a sequence of name="value" pairs
    #[error("malformed attribute: {0}")]
    MalformedAttribute(String),
    /// Opening or closing tag syntax error
    #[error("malformed tag: {0}")]
    MalformedTag(String),
    /// Non-blank input after the root element was closed
    #[error("unexpected content after the root element")]
    TrailingContent,
    #[error(transparent)]
    Security(#[from] SecurityError),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Configured limits exceeded while reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    #[error("maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
    #[error("maximum line length of {0} bytes exceeded")]
    MaxLineLengthExceeded(usize),
    #[error("maximum of {0} attributes per tag exceeded")]
    MaxAttributesExceeded(usize),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("read error: {0}")]
    ReadError(String),
    #[error("write error: {0}")]
    WriteError(String),
}

fn unexpected_closing_message(expected: &Option<String>, found: &str) -> String {
    match expected {
        Some(open) => format!("found closing tag </{found}> while <{open}> is open"),
        None => format!("found closing tag </{found}> with no open tag"),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Wraps a failed read from the line source
    pub(crate) fn read_failure(err: std::io::Error) -> Self {
        Self::new(ParseErrorKind::Io(IoError::ReadError(err.to_string()))).with_source(err)
    }

    /// Wraps a failed write to the line sink
    pub(crate) fn write_failure(err: std::io::Error) -> Self {
        Self::new(ParseErrorKind::Io(IoError::WriteError(err.to_string()))).with_source(err)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, self.kind
            )?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        Ok(())
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
