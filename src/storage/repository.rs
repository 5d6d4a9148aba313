use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{ExpenseRecord, ParseAmountError};

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt data in {path}: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid expense #{index} in {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        /// Zero-based position in the stored array
        index: usize,
        #[source]
        source: ParseAmountError,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Repository for loading and saving the expense list as a JSON array.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository backed by the file at `path`.
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records.
    /// A missing file is an empty ledger, not an error. Each stored record must
    /// have a valid amount; categories are lower-cased as on entry.
    pub fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stored: Vec<ExpenseRecord> =
            serde_json::from_str(&contents).map_err(|source| StorageError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        let records = stored
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.normalized().map_err(|source| StorageError::InvalidRecord {
                    path: self.path.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %self.path.display(), count = records.len(), "loaded expenses");
        Ok(records)
    }

    /// Overwrite the file with the full list of records.
    /// Writes to a temporary file in the same directory, then renames it into place.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), StorageError> {
        let write_failure = |source: io::Error| StorageError::WriteFailure {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(write_failure)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write_pretty_json(&mut writer, records).map_err(write_failure)?;
            writer.flush().map_err(write_failure)?;
        }
        temp.as_file().sync_all().map_err(write_failure)?;
        temp.persist(&self.path).map_err(|err| write_failure(err.error))?;

        info!(path = %self.path.display(), count = records.len(), "saved expenses");
        Ok(())
    }
}

/// Serialize as JSON indented with four spaces, the data file layout.
pub(crate) fn write_pretty_json<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer).map_err(io::Error::other)
}
