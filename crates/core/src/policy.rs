//! Resolution of the user's split options into a single partitioning policy.
//!
//! The three ways of splitting (`-b`, `-l`, `-n`) are mutually exclusive.
//! [`SplitConfig`] holds the raw values as the user gave them and
//! [`SplitConfig::resolve`] turns them into exactly one [`SplitPolicy`], or
//! fails before any file is touched.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::config::DEFAULT_LINE_COUNT;
use crate::error::{Error, Result};
use crate::parsing::{is_byte_size, parse_byte_size, parse_division_spec};

/// The unit a policy counts and how its threshold is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// A fixed number of lines per output file.
    LineCount,
    /// A fixed number of bytes per output file.
    ByteCount,
    /// The line count divided evenly into a number of output files.
    EquallyDividedLines,
}

/// The resolved rule applied to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPolicy {
    pub kind: SplitKind,
    /// Lines or bytes per file, or the number of pieces.
    pub value: u64,
    /// Numerator of a `K/N` chunk spec, zero otherwise. Not used when partitioning.
    pub auxiliary: u64,
}

impl SplitPolicy {
    #[must_use]
    pub fn lines(value: u64) -> Self {
        Self {
            kind: SplitKind::LineCount,
            value,
            auxiliary: 0,
        }
    }

    #[must_use]
    pub fn bytes(value: u64) -> Self {
        Self {
            kind: SplitKind::ByteCount,
            value,
            auxiliary: 0,
        }
    }

    #[must_use]
    pub fn equal_parts(value: u64, auxiliary: u64) -> Self {
        Self {
            kind: SplitKind::EquallyDividedLines,
            value,
            auxiliary,
        }
    }
}

impl Display for SplitPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SplitKind::LineCount => write!(f, "{} lines per file", self.value),
            SplitKind::ByteCount => write!(f, "{} bytes per file", self.value),
            SplitKind::EquallyDividedLines => write!(f, "lines divided into {} files", self.value),
        }
    }
}

/// The split options exactly as the user supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// `-b`: byte size spec.
    pub bytes: Option<String>,
    /// `-l`: lines per file.
    pub lines: i64,
    /// `-n`: chunk spec.
    pub number: Option<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            bytes: None,
            lines: DEFAULT_LINE_COUNT,
            number: None,
        }
    }
}

impl SplitConfig {
    /// Number of split options that differ from their defaults.
    fn selected_modes(&self) -> usize {
        [
            self.bytes.is_some(),
            self.lines != DEFAULT_LINE_COUNT,
            self.number.is_some(),
        ]
        .into_iter()
        .filter(|&selected| selected)
        .count()
    }

    /// Checks that at most one split option is set and that simple values are well formed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - More than one of `-b`, `-l` and `-n` is set
    /// - The line count is not positive
    /// - The byte size is malformed
    pub fn validate(&self) -> Result<()> {
        if self.selected_modes() > 1 {
            return Err(Error::ConfigurationConflict);
        }

        if self.lines <= 0 {
            return Err(Error::InvalidLineCount(self.lines));
        }

        if let Some(bytes) = &self.bytes {
            if !is_byte_size(bytes) {
                return Err(Error::InvalidByteSpec(bytes.clone()));
            }
        }

        Ok(())
    }

    /// Validates the options and resolves them into a [`SplitPolicy`].
    ///
    /// With nothing set, this is the default line count policy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the selected value cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use split_core::policy::{SplitConfig, SplitKind};
    ///
    /// let config = SplitConfig {
    ///     bytes: Some("10k".to_string()),
    ///     ..SplitConfig::default()
    /// };
    /// let policy = config.resolve()?;
    /// assert_eq!(policy.kind, SplitKind::ByteCount);
    /// assert_eq!(policy.value, 10 * 1024);
    /// # Ok::<(), split_core::error::Error>(())
    /// ```
    pub fn resolve(&self) -> Result<SplitPolicy> {
        self.validate()?;

        let policy = if let Some(number) = &self.number {
            let (numerator, denominator) = parse_division_spec(number)?;
            SplitPolicy::equal_parts(denominator, numerator)
        } else if let Some(bytes) = &self.bytes {
            SplitPolicy::bytes(parse_byte_size(bytes)?)
        } else {
            // validate() has rejected non-positive counts
            SplitPolicy::lines(self.lines.unsigned_abs())
        };

        debug!("Resolved split policy: {policy} ({policy:?})");
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bytes: Option<&str>, lines: i64, number: Option<&str>) -> SplitConfig {
        SplitConfig {
            bytes: bytes.map(ToString::to_string),
            lines,
            number: number.map(ToString::to_string),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SplitConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_resolves_to_default_lines() {
        let policy = SplitConfig::default().resolve().unwrap();
        assert_eq!(policy, SplitPolicy::lines(1000));
    }

    #[test]
    fn test_single_mode_passes_validation() {
        assert!(config(Some("10M"), DEFAULT_LINE_COUNT, None).validate().is_ok());
        assert!(config(None, 3, None).validate().is_ok());
        assert!(config(None, DEFAULT_LINE_COUNT, Some("5")).validate().is_ok());
    }

    #[test]
    fn test_multiple_modes_conflict() {
        let combinations = [
            config(Some("10"), 3, None),
            config(None, 3, Some("5")),
            config(Some("10"), DEFAULT_LINE_COUNT, Some("5")),
            config(Some("10"), 3, Some("5")),
        ];

        for combination in combinations {
            let result = combination.validate();
            assert!(
                matches!(result, Err(Error::ConfigurationConflict)),
                "{combination:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_explicit_default_line_count_does_not_conflict() {
        let policy = config(Some("10"), DEFAULT_LINE_COUNT, None).resolve().unwrap();
        assert_eq!(policy, SplitPolicy::bytes(10));

        let policy = config(None, DEFAULT_LINE_COUNT, Some("4")).resolve().unwrap();
        assert_eq!(policy, SplitPolicy::equal_parts(4, 0));
    }

    #[test]
    fn test_conflict_is_reported_before_value_errors() {
        let result = config(Some("garbage"), -5, None).validate();
        assert!(matches!(result, Err(Error::ConfigurationConflict)));
    }

    #[test]
    fn test_non_positive_lines() {
        for lines in [0, -1] {
            let result = config(None, lines, None).validate();
            assert!(matches!(result, Err(Error::InvalidLineCount(n)) if n == lines));
        }
    }

    #[test]
    fn test_invalid_byte_spec() {
        let result = config(Some("10AA"), DEFAULT_LINE_COUNT, None).validate();
        assert!(matches!(result, Err(Error::InvalidByteSpec(ref s)) if s == "10AA"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid number of bytes: ‘10AA’"
        );
    }

    #[test]
    fn test_resolve_bytes() {
        let policy = config(Some("100"), DEFAULT_LINE_COUNT, None).resolve().unwrap();
        assert_eq!(policy, SplitPolicy::bytes(100));
        assert_eq!(policy.auxiliary, 0);
    }

    #[test]
    fn test_resolve_lines() {
        let policy = config(None, 3, None).resolve().unwrap();
        assert_eq!(policy, SplitPolicy::lines(3));
    }

    #[test]
    fn test_resolve_equal_parts() {
        let policy = config(None, DEFAULT_LINE_COUNT, Some("5")).resolve().unwrap();
        assert_eq!(policy.kind, SplitKind::EquallyDividedLines);
        assert_eq!(policy.value, 5);
        assert_eq!(policy.auxiliary, 0);
    }

    #[test]
    fn test_resolve_chunk_range_keeps_numerator_as_auxiliary() {
        let policy = config(None, DEFAULT_LINE_COUNT, Some("2/5")).resolve().unwrap();
        assert_eq!(policy, SplitPolicy::equal_parts(5, 2));
    }

    #[test]
    fn test_resolve_invalid_division_spec() {
        let result = config(None, DEFAULT_LINE_COUNT, Some("5/3")).resolve();
        assert!(matches!(result, Err(Error::InvalidDivisionSpec(ref s)) if s == "5/3"));
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(SplitPolicy::lines(3).to_string(), "3 lines per file");
        assert_eq!(SplitPolicy::bytes(40).to_string(), "40 bytes per file");
        assert_eq!(
            SplitPolicy::equal_parts(5, 0).to_string(),
            "lines divided into 5 files"
        );
    }
}
