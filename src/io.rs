//! File helpers for converting RTF documents on disk.

use std::{fs::File, path::Path};

use log::debug;

use crate::{
    error::{ConvertError, Result},
    process::convert_opts,
    wrap::{LineSink, WriterSink},
};

/// Convert the file at `path`, delivering lines to `sink`.
///
/// # Errors
/// Returns [`ConvertError::Open`] if the file cannot be opened, or any error
/// raised while converting it.
pub fn convert_file<S: LineSink>(path: &Path, sink: S, width: usize) -> Result<S> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("converting {}", path.display());
    convert_opts(file, sink, width)
}

/// Convert the file at `path` into newline-terminated output bytes.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn convert_file_to_vec(path: &Path, width: usize) -> Result<Vec<u8>> {
    convert_file(path, WriterSink::new(Vec::new()), width)?
        .into_inner()
        .map_err(ConvertError::Write)
}
