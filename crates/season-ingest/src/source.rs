//! Race table file reading.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result, file_error};

/// Maximum size of one race table file (50 MB default).
pub const MAX_TABLE_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// The raw text of one race table and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub path: PathBuf,
    pub text: String,
}

impl TableSource {
    /// File name without extension, used as a display label.
    pub fn label(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl AsRef<str> for TableSource {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_TABLE_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. A UTF-8 BOM is
/// fine; the table parser strips it from the header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| file_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| file_error(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads one race table file.
pub fn read_table_source(path: &Path) -> Result<TableSource> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read race table");

    Ok(TableSource {
        path: path.to_path_buf(),
        text,
    })
}

/// Reads every race table file, keeping the given order.
pub fn read_table_sources(paths: &[PathBuf]) -> Result<Vec<TableSource>> {
    paths.iter().map(|path| read_table_source(path)).collect()
}
