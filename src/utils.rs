use crate::{
    error::{IoError, ParseError, ParseErrorKind, Result},
    parser::Reader,
    structure::Structure,
    writer::{FormatConfig, Writer},
};
use std::{fs, io};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => IoError::FileNotFound(path.to_string()),
            _ => IoError::ReadError(format!("Cannot read file: {}", path)),
        };
        ParseError::new(ParseErrorKind::Io(kind)).with_source(e)
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        ParseError::new(ParseErrorKind::Io(IoError::WriteError(format!(
            "Cannot write to file: {}",
            path
        ))))
        .with_source(e)
    })
}

/// Parses a whole document held in memory
pub fn from_str(content: &str) -> Result<Structure> {
    Reader::new(content.as_bytes()).read()
}

/// Serializes a tree with the default formatting
pub fn to_string(structure: &Structure) -> Result<String> {
    to_string_with_config(structure, &FormatConfig::default())
}

pub fn to_string_with_config(structure: &Structure, config: &FormatConfig) -> Result<String> {
    let mut writer = Writer::with_config(Vec::new(), config.clone());
    writer.write(structure)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
