//! Partitioning of one input file into sequentially named output files.
//!
//! A run reads the whole input, derives the per-file threshold from the
//! [`SplitPolicy`], and then writes `threshold` units (lines or bytes) into
//! each output file before moving on to the next name handed out by the
//! [`SuffixGenerator`]. Output files are opened only when there is something
//! left to write, and each one is flushed and closed before the next is
//! created.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{DEFAULT_PREFIX, DEFAULT_SUFFIX_WIDTH};
use crate::error::{Error, Result};
use crate::file_handling::{create_output, finish_output, read_input};
use crate::policy::{SplitKind, SplitPolicy};
use crate::suffix::SuffixGenerator;

/// How output files are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingOptions {
    /// Literal start of every output file name, possibly including a directory.
    pub prefix: String,
    /// Initial width of the alphabetic suffix.
    pub suffix_width: usize,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix_width: DEFAULT_SUFFIX_WIDTH,
        }
    }
}

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Lines or bytes written to the file.
    pub units: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Units written to each file except possibly the last.
    pub threshold: usize,
    /// Output files in the order they were written.
    pub files: Vec<OutputFile>,
}

/// Splits input according to a policy and naming scheme.
#[derive(Debug, Clone)]
pub struct Partitioner {
    policy: SplitPolicy,
    names: SuffixGenerator,
}

impl Partitioner {
    /// Creates a partitioner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffixLength`] if the suffix width is zero.
    pub fn new(policy: SplitPolicy, naming: NamingOptions) -> Result<Self> {
        let names = SuffixGenerator::new(naming.prefix, naming.suffix_width)?;
        Ok(Self { policy, names })
    }

    #[must_use]
    pub fn policy(&self) -> &SplitPolicy {
        &self.policy
    }

    /// Reads the file at `input` and splits it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be read
    /// - The policy does not yield a usable threshold for this input
    /// - An output file cannot be created or written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use split_core::partition::{NamingOptions, Partitioner};
    /// use split_core::policy::SplitPolicy;
    ///
    /// let partitioner = Partitioner::new(SplitPolicy::lines(1000), NamingOptions::default())?;
    /// let summary = partitioner.split_file(Path::new("access.log"))?;
    /// println!("Wrote {} files", summary.files.len());
    /// # Ok::<(), split_core::error::Error>(())
    /// ```
    pub fn split_file(&self, input: &Path) -> Result<SplitSummary> {
        self.split_file_with(input, |_| {})
    }

    /// Like [`Partitioner::split_file`], calling `on_create` with each output
    /// path just before that file is created.
    ///
    /// # Errors
    ///
    /// Same as [`Partitioner::split_file`]. Files reported to `on_create`
    /// before a failure stay on disk.
    pub fn split_file_with(
        &self,
        input: &Path,
        on_create: impl FnMut(&Path),
    ) -> Result<SplitSummary> {
        info!("Splitting `{}`: {}", input.display(), self.policy);
        let data = read_input(input)?;
        self.split_data_with(&data, on_create)
    }

    /// Splits data that is already in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is invalid for `data` or an output
    /// file cannot be created or written.
    pub fn split_data(&self, data: &[u8]) -> Result<SplitSummary> {
        self.split_data_with(data, |_| {})
    }

    /// Like [`Partitioner::split_data`], with a hook called before each output file is created.
    ///
    /// # Errors
    ///
    /// Same as [`Partitioner::split_data`].
    pub fn split_data_with(
        &self,
        data: &[u8],
        mut on_create: impl FnMut(&Path),
    ) -> Result<SplitSummary> {
        let mut names = self.names.clone();

        match self.policy.kind {
            SplitKind::ByteCount => {
                let threshold = derive_threshold(&self.policy, data.len())?;
                debug!("Writing {} bytes, {threshold} per file", data.len());

                let files = write_pieces(
                    data.chunks(threshold),
                    &mut names,
                    &mut on_create,
                    |writer, chunk| {
                        writer.write_all(chunk)?;
                        Ok(chunk.len())
                    },
                )?;
                Ok(SplitSummary { threshold, files })
            }
            SplitKind::LineCount | SplitKind::EquallyDividedLines => {
                let lines = split_lines(data);
                let threshold = derive_threshold(&self.policy, lines.len())?;
                debug!("Writing {} lines, {threshold} per file", lines.len());

                let files = write_pieces(
                    lines.chunks(threshold),
                    &mut names,
                    &mut on_create,
                    |writer, chunk| {
                        for line in chunk {
                            writer.write_all(line)?;
                            writer.write_all(b"\n")?;
                        }
                        Ok(chunk.len())
                    },
                )?;
                Ok(SplitSummary { threshold, files })
            }
        }
    }
}

/// Derives the number of units per output file for an input of `available` units.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] when the result would be zero or, for
/// fixed counts, larger than the input.
///
/// # Examples
///
/// ```
/// use split_core::partition::derive_threshold;
/// use split_core::policy::SplitPolicy;
///
/// assert_eq!(derive_threshold(&SplitPolicy::equal_parts(5, 0), 10)?, 2);
/// assert!(derive_threshold(&SplitPolicy::lines(20), 10).is_err());
/// # Ok::<(), split_core::error::Error>(())
/// ```
pub fn derive_threshold(policy: &SplitPolicy, available: usize) -> Result<usize> {
    let unit = match policy.kind {
        SplitKind::ByteCount => "bytes",
        SplitKind::LineCount | SplitKind::EquallyDividedLines => "lines",
    };
    let invalid = || Error::invalid_threshold(unit, policy.value, available);

    let threshold = match policy.kind {
        SplitKind::LineCount | SplitKind::ByteCount => {
            let threshold = usize::try_from(policy.value).map_err(|_| invalid())?;
            if threshold > available {
                return Err(invalid());
            }
            threshold
        }
        SplitKind::EquallyDividedLines => {
            if policy.value == 0 {
                return Err(invalid());
            }
            // More pieces than a usize can count means less than one unit each
            usize::try_from(policy.value).map_or(0, |pieces| available / pieces)
        }
    };

    if threshold == 0 {
        return Err(invalid());
    }

    Ok(threshold)
}

/// Splits `data` into newline-separated lines, without their newlines.
///
/// A trailing newline ends the last line rather than starting an empty one.
fn split_lines(data: &[u8]) -> Vec<&[u8]> {
    if data.is_empty() {
        return Vec::new();
    }

    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.split(|&byte| byte == b'\n').collect()
}

/// Writes each piece into its own freshly named output file.
fn write_pieces<P, F>(
    pieces: impl Iterator<Item = P>,
    names: &mut SuffixGenerator,
    on_create: &mut impl FnMut(&Path),
    mut write_piece: F,
) -> Result<Vec<OutputFile>>
where
    F: FnMut(&mut BufWriter<File>, P) -> std::io::Result<usize>,
{
    let mut files = Vec::new();

    for piece in pieces {
        let path = PathBuf::from(names.next_name());
        info!("Creating file `{}`", path.display());
        on_create(&path);

        let mut writer = create_output(&path)?;
        let units = write_piece(&mut writer, piece)
            .map_err(|e| Error::io_error("output".to_string(), path.display().to_string(), e))?;
        finish_output(writer, &path)?;

        files.push(OutputFile { path, units });
    }

    Ok(files)
}
