//! linexml: a line-oriented reader and writer for a restricted XML dialect
//!
//! This crate provides functionality to:
//! - Parse documents into a [`Structure`] tree, validating tag nesting
//! - Serialize trees back into indented, tag-per-line text
//! - Read and write documents stored in files
//! - Handle errors with line, column and the offending line as context
//!
//! The dialect has opening tags with `name="value"` attributes, matching
//! closing tags, self-closing tags and plain text. Namespaces, comments,
//! CDATA, processing instructions and entities are not supported.
//!
//! # Examples
//! ```
//! use linexml::{from_str, to_string, Result, Structure};
//!
//! fn example() -> Result<()> {
//!     let tree = from_str("<root>\n  <child>hello</child>\n</root>")?;
//!     assert_eq!(
//!         tree,
//!         Structure::new("root").with_child(Structure::new("child").with_content("hello"))
//!     );
//!     assert_eq!(to_string(&tree)?, "<root>\n\t<child>hello</child>\n</root>\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod error;
pub mod file;
pub mod parser;
pub mod structure;
pub mod test_utils;
pub mod utils;
pub mod writer;

// Re-exports
pub use error::{ParseError, ParseErrorKind, Result};
pub use file::XmlFile;
pub use parser::{ParserConfig, Reader};
pub use structure::Structure;
pub use utils::{from_str, to_string};
pub use writer::{FormatConfig, Indent, Writer};

#[instrument]
pub fn parse_file(path: &str) -> Result<Structure> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully, parsing");
    let result = from_str(&content);

    debug!("Parsing completed");
    result
}

#[instrument(skip(structure))]
pub fn write_file(path: &str, structure: &Structure) -> Result<()> {
    let content = to_string(structure)?;
    utils::write_file(path, &content)?;
    debug!("Wrote {} bytes", content.len());
    Ok(())
}
