//! File access for split.
//!
//! This module reads the input file and creates output files, attaching the
//! path and the role of the file to every I/O error.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns an [`Error::Io`] if the file does not exist or cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| Error::io_error("input".to_string(), path.display().to_string(), e))
}

/// Creates (or truncates) an output file and wraps it in a buffered writer.
///
/// # Errors
///
/// Returns an [`Error::Io`] if the file cannot be created.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    match File::create(path) {
        Ok(f) => Ok(BufWriter::new(f)),
        Err(e) => Err(Error::io_error(
            "output".to_string(),
            path.display().to_string(),
            e,
        )),
    }
}

/// Flushes a buffered output file, consuming it so the handle is closed.
///
/// # Errors
///
/// Returns an [`Error::Io`] if buffered data cannot be written out.
pub fn finish_output(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
    writer
        .flush()
        .map_err(|e| Error::io_error("output".to_string(), path.display().to_string(), e))
}
