//! Defaults and path utilities for split.
//!
//! This module holds the default values shared by the resolver, the
//! partitioner and the CLI, and expands shell shortcuts like `~` in the
//! paths a user hands in.

use std::path::PathBuf;

/// Default number of lines per output file when `-l` is not given
pub const DEFAULT_LINE_COUNT: i64 = 1000;

/// Default prefix for output file names
pub const DEFAULT_PREFIX: &str = "x";

/// Default initial width of the alphabetic suffix
pub const DEFAULT_SUFFIX_WIDTH: usize = 2;

/// Character appended to the prefix whenever the suffix widens
pub const ROLLOVER_FILLER: char = 'z';

/// Resolves the input file path.
///
/// Shell expansions like `~` are resolved; everything else is taken as is.
///
/// # Examples
///
/// ```
/// use split_core::config::get_input_path;
///
/// let path = get_input_path("data/input.txt");
/// assert_eq!(path.to_str(), Some("data/input.txt"));
/// ```
#[must_use]
pub fn get_input_path(input_path_arg: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(input_path_arg).as_ref())
}

/// Resolves the output file name prefix.
///
/// If no prefix is provided the default `x` is used. A prefix may contain a
/// directory, in which case `~` is expanded.
///
/// # Examples
///
/// ```
/// use split_core::config::get_prefix;
///
/// assert_eq!(get_prefix(&None), "x");
/// assert_eq!(get_prefix(&Some("part_".to_string())), "part_");
/// ```
#[must_use]
pub fn get_prefix(prefix_arg: &Option<String>) -> String {
    let prefix = match prefix_arg {
        Some(prefix) => prefix,
        None => DEFAULT_PREFIX,
    };

    shellexpand::tilde(prefix).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_input_path_plain() {
        let result = get_input_path("/absolute/path/input.log");
        assert_eq!(result, PathBuf::from("/absolute/path/input.log"));
    }

    #[test]
    fn test_get_input_path_with_tilde() {
        let result = get_input_path("~/input.log");
        let result = result.to_string_lossy();
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("input.log"));
    }

    #[test]
    fn test_get_prefix_with_none() {
        assert_eq!(get_prefix(&None), DEFAULT_PREFIX);
    }

    #[test]
    fn test_get_prefix_with_tilde() {
        let result = get_prefix(&Some("~/chunks/part_".to_string()));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("chunks/part_"));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_LINE_COUNT, 1000);
        assert_eq!(DEFAULT_SUFFIX_WIDTH, 2);
        assert_eq!(ROLLOVER_FILLER, 'z');
    }
}
