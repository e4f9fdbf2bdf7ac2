//! Parsers for the `-b` size and `-n` chunk specifications.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Size with an optional binary unit and an optional trailing `B`.
static BYTE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([kKmMGTP])?B?$").expect("valid regex"));

/// A bare chunk count.
static CHUNK_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// A `K/N` chunk range.
static CHUNK_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid regex"));

fn unit_exponent(unit: &str) -> Option<u32> {
    match unit {
        "k" | "K" => Some(1),
        "m" | "M" => Some(2),
        "G" => Some(3),
        "T" => Some(4),
        "P" => Some(5),
        _ => None,
    }
}

/// Returns whether `input` has the shape of a byte size, without evaluating it.
#[must_use]
pub fn is_byte_size(input: &str) -> bool {
    BYTE_SIZE.is_match(input)
}

/// Parses a byte size such as `512`, `2k`, `10M` or `1KB` into a number of bytes.
///
/// Units are powers of 1024: `k`/`K`, `m`/`M`, `G`, `T` and `P`.
///
/// # Errors
///
/// Returns [`Error::InvalidByteSpec`] if the input is malformed or the size
/// does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use split_core::parsing::parse_byte_size;
///
/// assert_eq!(parse_byte_size("2k").unwrap(), 2048);
/// assert!(parse_byte_size("10AA").is_err());
/// ```
pub fn parse_byte_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidByteSpec(input.to_string());

    let captures = BYTE_SIZE.captures(input).ok_or_else(invalid)?;
    let size: u64 = captures[1].parse().map_err(|_| invalid())?;

    let Some(unit) = captures.get(2) else {
        return Ok(size);
    };

    let exponent = unit_exponent(unit.as_str()).ok_or_else(invalid)?;
    1024u64
        .checked_pow(exponent)
        .and_then(|multiplier| size.checked_mul(multiplier))
        .ok_or_else(invalid)
}

/// Parses a chunk specification into `(numerator, denominator)`.
///
/// `N` yields `(0, N)` and `K/N` yields `(K, N)`, where `1 <= K <= N`.
///
/// # Errors
///
/// Returns [`Error::InvalidDivisionSpec`] for any other input.
///
/// # Examples
///
/// ```
/// use split_core::parsing::parse_division_spec;
///
/// assert_eq!(parse_division_spec("4").unwrap(), (0, 4));
/// assert_eq!(parse_division_spec("2/4").unwrap(), (2, 4));
/// assert!(parse_division_spec("5/3").is_err());
/// ```
pub fn parse_division_spec(input: &str) -> Result<(u64, u64)> {
    let invalid = || Error::InvalidDivisionSpec(input.to_string());

    if CHUNK_COUNT.is_match(input) {
        let count = input.parse().map_err(|_| invalid())?;
        return Ok((0, count));
    }

    let captures = CHUNK_RANGE.captures(input).ok_or_else(invalid)?;
    let numerator: u64 = captures[1].parse().map_err(|_| invalid())?;
    let denominator: u64 = captures[2].parse().map_err(|_| invalid())?;

    if numerator == 0 || numerator > denominator {
        return Err(invalid());
    }

    Ok((numerator, denominator))
}
