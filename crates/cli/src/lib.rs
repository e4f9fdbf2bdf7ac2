//! Split CLI Library
//!
//! This crate provides the command-line interface for `split`. It parses the
//! arguments, resolves them into a split policy, runs the partitioner and
//! reports what was created.
//!
//! # Examples
//!
//! The CLI binary (`split`) can be used in several ways:
//!
//! ```bash
//! # 1000 lines per file (the default): xaa, xab, ...
//! split access.log
//!
//! # 100 lines per file
//! split -l 100 access.log
//!
//! # 10 MiB per file
//! split -b 10M backup.tar
//!
//! # Divide the lines into 4 files, named part_aa, part_ab, ...
//! split -n 4 --prefix part_ access.log
//! ```

pub mod cli_args;

use log::debug;
use split_core::config::get_input_path;
use split_core::error::Result;
use split_core::partition::{Partitioner, SplitSummary};

use crate::cli_args::Args;

/// Runs one split for the parsed arguments.
///
/// All options are validated before the input file is opened. With
/// `--verbose`, each output file is announced on stdout just before it is
/// created, so files left behind by a failed run have been reported.
///
/// # Errors
///
/// Returns an error if the options are invalid or conflicting, the input
/// cannot be read, or an output file cannot be written.
pub fn run(args: &Args) -> Result<SplitSummary> {
    debug!("-b: {:?}", args.bytes);
    debug!("-l: {}", args.lines);
    debug!("-n: {:?}", args.number);

    let policy = args.split_config().resolve()?;
    let partitioner = Partitioner::new(policy, args.naming_options())?;
    debug!("Splitting with {}", partitioner.policy());

    let input = get_input_path(&args.file);
    partitioner.split_file_with(&input, |path| {
        if args.verbose {
            println!("creating file '{}'", path.display());
        }
    })
}
