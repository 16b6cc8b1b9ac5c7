use crate::error::{ParseError, Result, SecurityError};

pub const DEFAULT_MAX_DEPTH: usize = 128;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024; // 1MB
pub const DEFAULT_MAX_ATTRIBUTES: usize = 256;

/// Configuration for reader limits
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum nesting depth of tags
    pub max_depth: usize,
    /// Maximum length of a single input line in bytes
    pub max_line_length: usize,
    /// Maximum number of attributes on one tag
    pub max_attributes: usize,
}

/// Tracks nesting depth during a read
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
        }
    }
}

impl ParserConfig {
    /// Checks the byte length of one line, terminator excluded
    pub fn validate_line_length(&self, len: usize) -> Result<()> {
        if len > self.max_line_length {
            return Err(ParseError::new(
                SecurityError::MaxLineLengthExceeded(self.max_line_length).into(),
            ));
        }
        Ok(())
    }

    pub fn validate_attribute_count(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            return Err(ParseError::new(
                SecurityError::MaxAttributesExceeded(self.max_attributes).into(),
            ));
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ParseError::new(
                SecurityError::MaxDepthExceeded(config.max_depth).into(),
            ));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }
}
