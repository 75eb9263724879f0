use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data layer while loading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    /// A required column is absent from the source.
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A CSV record could not be read or deserialized.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON document could not be parsed into story records.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for parquet/arrow errors carried via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the data layer.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DataError::Read {
            path: PathBuf::from("/data/media_data.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("/data/media_data.csv"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = DataError::MissingColumn("Media Type");
        assert_eq!(
            err.to_string(),
            "dataset is missing required column 'Media Type'"
        );
    }

    #[test]
    fn test_unsupported_extension_display() {
        let err = DataError::UnsupportedExtension("xlsx".to_string());
        assert_eq!(err.to_string(), "unsupported file extension: .xlsx");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err: DataError = json_err.into();
        assert!(err.to_string().contains("failed to parse JSON"));
    }
}
