//! Alphabetic suffixes for output file names.
//!
//! Output files are named `<prefix><suffix>`, where the suffix is the file
//! index written in base 26 over `a..=z` and padded with `a` to the current
//! width. Once every suffix of the current width is used, the width grows by
//! one and the prefix gains a trailing `z`, so a name is never reused:
//! `xaa … xzz`, then `xzaaa … xzzzz`, then `xzzaaaa …`.

use log::debug;

use crate::config::ROLLOVER_FILLER;
use crate::error::{Error, Result};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const RADIX: u64 = ALPHABET.len() as u64;

/// Converts `index` to its base-26 alphabetic form, left-padded with `a` to `width`.
///
/// An index too large for `width` yields a longer string rather than being truncated.
///
/// # Examples
///
/// ```
/// use split_core::suffix::to_alphabetic;
///
/// assert_eq!(to_alphabetic(0, 2), "aa");
/// assert_eq!(to_alphabetic(27, 2), "bb");
/// ```
#[must_use]
pub fn to_alphabetic(index: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width);
    let mut remaining = index;

    while remaining > 0 {
        digits.push(ALPHABET[(remaining % RADIX) as usize]);
        remaining /= RADIX;
    }

    while digits.len() < width {
        digits.push(ALPHABET[0]);
    }

    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

/// Number of distinct suffixes of `width` characters, or `None` when that
/// does not fit in a `u64` (such a width is never exhausted in practice).
fn capacity(width: usize) -> Option<u64> {
    u32::try_from(width)
        .ok()
        .and_then(|width| RADIX.checked_pow(width))
}

/// Hands out output file names in order, widening the suffix when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixGenerator {
    prefix: String,
    width: usize,
    counter: u64,
}

impl SuffixGenerator {
    /// Creates a generator starting at the all-`a` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffixLength`] if `width` is zero.
    pub fn new(prefix: impl Into<String>, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidSuffixLength(width));
        }

        Ok(Self {
            prefix: prefix.into(),
            width,
            counter: 0,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the next file name and advances the generator.
    pub fn next_name(&mut self) -> String {
        if capacity(self.width).is_some_and(|capacity| self.counter >= capacity) {
            self.roll_over();
        }

        let name = format!("{}{}", self.prefix, to_alphabetic(self.counter, self.width));
        self.counter += 1;
        name
    }

    fn roll_over(&mut self) {
        self.prefix.push(ROLLOVER_FILLER);
        self.width += 1;
        self.counter = 0;
        debug!(
            "Suffix space exhausted, continuing with prefix `{}` and width {}",
            self.prefix, self.width
        );
    }
}

impl Iterator for SuffixGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_name())
    }
}
