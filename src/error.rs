//! Write-side error types shared by the configuration and state stores.
//!
//! Read-side problems never surface as errors: a missing or corrupt file is
//! a recovery case handled inside the store. Only failures to persist a
//! record propagate to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting a record file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the directory that holds the record file.
    #[error("Failed to create directory: {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or sync the temporary file.
    #[error("Failed to write record file: {path}")]
    Write {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The temporary file was written but could not replace the record file.
    /// The temporary file is left behind as a safety copy.
    #[error("Failed to replace {path} with {temp_path}")]
    Rename {
        /// Destination record file.
        path: PathBuf,
        /// Temporary file that holds the written content.
        temp_path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized to JSON.
    #[error("Failed to serialize record: {message}")]
    Serialize {
        /// Description of the serialization failure.
        message: String,
    },
}
