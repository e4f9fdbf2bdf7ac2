//! Split Core Library
//!
//! This crate provides the core functionality for `split`, a tool that
//! partitions one input file into several output files by line count, by
//! byte count, or by dividing its lines into a number of equal parts.
//!
//! # Key Features
//!
//! - **Split Policies**: Resolve mutually exclusive `-b`/`-l`/`-n` options into one rule
//! - **Size Parsing**: Byte sizes with binary units (`10k`, `5M`, `1GB`) and chunk specs (`4`, `2/4`)
//! - **File Naming**: Alphabetic suffixes (`xaa`, `xab`, …) that widen instead of wrapping
//! - **Partitioning**: Sequential output files, each closed before the next is opened
//! - **Error Handling**: Error types for every configuration and I/O failure
//!
//! # Examples
//!
//! Splitting a file into pieces of 100 lines:
//!
//! ```no_run
//! use std::path::Path;
//! use split_core::partition::{NamingOptions, Partitioner};
//! use split_core::policy::SplitConfig;
//!
//! let config = SplitConfig {
//!     lines: 100,
//!     ..SplitConfig::default()
//! };
//! let partitioner = Partitioner::new(config.resolve()?, NamingOptions::default())?;
//! for file in partitioner.split_file(Path::new("input.txt"))?.files {
//!     println!("{}: {} lines", file.path.display(), file.units);
//! }
//! # Ok::<(), split_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod parsing;
pub mod partition;
pub mod policy;
pub mod suffix;
