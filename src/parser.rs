//! Line-oriented reader.
//!
//! Lines flow from a [`LineBuffer`] through the [`scanner`] into the
//! recursive-descent [`Reader`], which validates nesting with a [`TagStack`].

pub mod config;
pub mod cursor;
pub mod lines;
pub mod reader;
pub mod scanner;
pub mod stack;

pub use self::{
    config::{ParserConfig, ParsingContext},
    cursor::Cursor,
    lines::LineBuffer,
    reader::Reader,
    stack::TagStack,
};
