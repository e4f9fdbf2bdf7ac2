//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate and maps it onto the option types of `split-core`.

use clap::Parser;
use split_core::config::{get_prefix, DEFAULT_LINE_COUNT, DEFAULT_SUFFIX_WIDTH};
use split_core::partition::NamingOptions;
use split_core::policy::SplitConfig;

/// Command-line arguments for the `split` binary.
///
/// Only one of `-b`, `-l` and `-n` may be given; the check happens when the
/// arguments are resolved into a policy, so that the error is reported as
/// `split: cannot split in more than one way`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use split_cli::cli_args::Args;
///
/// let args = Args::parse_from(["split", "-l", "100", "access.log"]);
/// assert_eq!(args.lines, 100);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "split", about = "Split a file into pieces")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Put SIZE bytes per output file.
    ///
    /// SIZE is an integer with an optional unit (`k`/`K`, `m`/`M`, `G`, `T`, `P`,
    /// powers of 1024) and an optional trailing `B`, e.g. `512`, `10k`, `1GB`.
    #[arg(long, short = 'b', value_name = "SIZE")]
    pub bytes: Option<String>,

    /// Put NUMBER lines per output file.
    #[arg(
        long,
        short = 'l',
        value_name = "NUMBER",
        default_value_t = DEFAULT_LINE_COUNT,
        allow_negative_numbers = true
    )]
    pub lines: i64,

    /// Divide the lines into CHUNKS output files of equal size.
    ///
    /// Either `N`, or `K/N`, where K is accepted but does not select a chunk.
    #[arg(long, short = 'n', value_name = "CHUNKS")]
    pub number: Option<String>,

    /// Start of every output file name. Defaults to `x`.
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Initial length of the alphabetic suffix.
    #[arg(long, short = 'a', value_name = "N", default_value_t = DEFAULT_SUFFIX_WIDTH)]
    pub suffix_length: usize,

    /// Print a line for every output file created.
    #[arg(long, action)]
    pub verbose: bool,

    /// The file to split.
    pub file: String,
}

impl Args {
    /// The split options as given, before validation.
    #[must_use]
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig {
            bytes: self.bytes.clone(),
            lines: self.lines,
            number: self.number.clone(),
        }
    }

    #[must_use]
    pub fn naming_options(&self) -> NamingOptions {
        NamingOptions {
            prefix: get_prefix(&self.prefix),
            suffix_width: self.suffix_length,
        }
    }
}
