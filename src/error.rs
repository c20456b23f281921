//! Error types for the converter.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures that abort a conversion.
///
/// Reaching the end of the input is not an error. Malformed or unexpected
/// control sequences never produce one either: the worst case is that they
/// come out as literal text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the input stream failed.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// Writing a finished line to the output sink failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The requested wrap width cannot make progress.
    #[error("wrap width {width} is below the minimum of {min}")]
    Width { width: usize, min: usize },
}
