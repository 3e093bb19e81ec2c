//! File-to-file conversion pipeline.
//!
//! Each stage is a separate function so a front end can report progress
//! between them; [`convert_file`] runs them all in order.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::encoding;
use crate::error::{Error, Result};
use crate::extract;
use crate::options::Options;
use crate::result::{Contact, ExtractResult};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "contacts.json";

/// Paths and options for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source HTML file.
    pub input: PathBuf,

    /// Destination JSON file.
    ///
    /// Default: `contacts.json`
    pub output: PathBuf,

    /// Extraction options.
    pub options: Options,
}

impl Config {
    /// Creates a config for `input` with the default output path and options.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            options: Options::default(),
        }
    }

    /// Sets the destination JSON file.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the extraction options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Read and decode the input HTML file.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if `path` is not an existing file
/// - [`Error::Read`] if reading fails
/// - [`Error::Decode`] if the content is not valid UTF-8
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    encoding::decode_utf8(&bytes).ok_or_else(|| Error::Decode {
        path: path.to_path_buf(),
    })
}

/// Serialize contacts as a pretty-printed JSON array.
///
/// Uses 2-space indentation and keeps non-ASCII characters as-is. The
/// output has no trailing newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if encoding fails.
pub fn to_json(contacts: &[Contact]) -> Result<String> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

/// Write `json` to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns [`Error::Write`] if a directory or the file cannot be written.
pub fn write_output(path: &Path, json: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;
    debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

/// Run the whole conversion: read, extract, serialize, write.
///
/// Nothing is written unless at least one contact was found.
///
/// # Errors
///
/// Returns [`Error::NoContacts`] for an empty result, or any error from the
/// individual stages.
pub fn convert_file(config: &Config) -> Result<ExtractResult> {
    let html = read_input(&config.input)?;
    let result = extract::extract_contacts(&html, &config.options)?;
    if result.is_empty() {
        return Err(Error::NoContacts);
    }

    let json = to_json(&result.contacts)?;
    write_output(&config.output, &json)?;
    info!(
        "converted {} contacts from {} to {}",
        result.contacts.len(),
        config.input.display(),
        config.output.display()
    );
    Ok(result)
}
