//! File-backed documents
//!
//! [`XmlFile`] owns the path of one document and remembers the tree that was
//! most recently read from or written to it.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    error::{IoError, ParseError, ParseErrorKind, Result},
    parser::{ParserConfig, Reader},
    structure::Structure,
    writer::{FormatConfig, Writer},
};

/// A document stored on disk
#[derive(Debug)]
pub struct XmlFile {
    path: PathBuf,
    parser_config: ParserConfig,
    format_config: FormatConfig,
    structure: Option<Structure>,
}

impl XmlFile {
    /// Opens an existing file without reading it
    ///
    /// # Errors
    /// `Io(FileNotFound)` when the path does not exist or is not a file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ParseError::new(ParseErrorKind::Io(IoError::FileNotFound(
                path.display().to_string(),
            ))));
        }
        Ok(Self::at(path))
    }

    /// Creates the file, truncating it if it already exists
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        File::create(path).map_err(|e| {
            ParseError::new(ParseErrorKind::Io(IoError::WriteError(format!(
                "Cannot create file: {}",
                path.display()
            ))))
            .with_source(e)
        })?;
        Ok(Self::at(path))
    }

    fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            parser_config: ParserConfig::default(),
            format_config: FormatConfig::default(),
            structure: None,
        }
    }

    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser_config = config;
        self
    }

    pub fn with_format_config(mut self, config: FormatConfig) -> Self {
        self.format_config = config;
        self
    }

    /// Parses the whole file and keeps the result
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&mut self) -> Result<&Structure> {
        self.structure = None;
        let file = File::open(&self.path).map_err(|e| {
            ParseError::new(ParseErrorKind::Io(IoError::ReadError(format!(
                "Cannot read file: {}",
                self.path.display()
            ))))
            .with_source(e)
        })?;

        let mut reader = Reader::with_config(BufReader::new(file), self.parser_config.clone());
        let structure = reader.read()?;
        info!(root = %structure.key, lines = reader.line_number(), "file parsed");
        Ok(&*self.structure.insert(structure))
    }

    /// Replaces the file contents with `structure` and keeps it
    #[instrument(skip(self, structure), fields(path = %self.path.display()))]
    pub fn write(&mut self, structure: Structure) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| {
            ParseError::new(ParseErrorKind::Io(IoError::WriteError(format!(
                "Cannot write to file: {}",
                self.path.display()
            ))))
            .with_source(e)
        })?;

        let mut writer = Writer::with_config(BufWriter::new(file), self.format_config.clone());
        writer.write(&structure)?;
        debug!(root = %structure.key, "file written");
        self.structure = Some(structure);
        Ok(())
    }

    /// The tree most recently read from or written to this file
    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
