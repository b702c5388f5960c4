// crates/radiogcc-core/src/codes.rs

//! Syntax validation and normalization for the code spaces this crate
//! handles: ISO 3166-1 alpha-2 country codes, RDS ECCs, RDS PI codes and DAB
//! SIds.
//!
//! The engine is case-insensitive end-to-end; every code is normalized to
//! lowercase once, at the boundary, and compared verbatim afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A broadcast country identifier: the single hex nibble carried in the
/// leading digit of an RDS PI code or the country field of a DAB SId.
///
/// Always a lowercase hex digit (`0`–`9`, `a`–`f`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(char);

impl CountryId {
    /// Accepts a single hex digit of either case.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_hexdigit().then(|| CountryId(c.to_ascii_lowercase()))
    }

    /// Accepts a one-character hex string of either case.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// Caller guarantees `c` is a lowercase hex digit.
    pub(crate) fn from_hex_unchecked(c: char) -> Self {
        debug_assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        CountryId(c)
    }

    /// The nibble as a lowercase hex character.
    #[inline]
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates an ISO 3166-1 alpha-2 country code and returns it lowercased.
pub fn norm_iso(code: &str) -> Option<String> {
    let valid = code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| code.to_ascii_lowercase())
}

/// Validates a two-digit hexadecimal Extended Country Code and returns it
/// lowercased.
pub fn norm_ecc(ecc: &str) -> Option<String> {
    norm_hex(ecc, 2)
}

/// Validates a four-digit hexadecimal RDS PI code and returns it lowercased.
pub fn norm_pi(pi: &str) -> Option<String> {
    norm_hex(pi, 4)
}

/// Validates a DAB SId (four hex digits for an audio service, eight for an
/// ECC-prefixed data service) and returns it lowercased.
pub fn norm_sid(sid: &str) -> Option<String> {
    norm_hex(sid, 4).or_else(|| norm_hex(sid, 8))
}

fn norm_hex(code: &str, len: usize) -> Option<String> {
    let valid = code.len() == len && code.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| code.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_id_accepts_hex_either_case() {
        assert_eq!(CountryId::new('D').unwrap().as_char(), 'd');
        assert_eq!(CountryId::new('4').unwrap().as_char(), '4');
        assert_eq!(CountryId::parse("A").unwrap().as_char(), 'a');
        assert!(CountryId::new('g').is_none());
        assert!(CountryId::parse("").is_none());
        assert!(CountryId::parse("4e").is_none());
    }

    #[test]
    fn iso_codes_are_two_letters() {
        assert_eq!(norm_iso("CH").as_deref(), Some("ch"));
        assert_eq!(norm_iso("gb").as_deref(), Some("gb"));
        assert!(norm_iso("X").is_none());
        assert!(norm_iso("XXX").is_none());
        assert!(norm_iso("4e").is_none());
        assert!(norm_iso("").is_none());
    }

    #[test]
    fn ecc_is_two_hex_digits() {
        assert_eq!(norm_ecc("E0").as_deref(), Some("e0"));
        assert!(norm_ecc("e").is_none());
        assert!(norm_ecc("xy").is_none());
    }

    #[test]
    fn pi_is_four_hex_digits() {
        assert_eq!(norm_pi("C479").as_deref(), Some("c479"));
        assert!(norm_pi("A").is_none());
        assert!(norm_pi("AAAAA").is_none());
        assert!(norm_pi("XXXX").is_none());
    }

    #[test]
    fn sid_is_four_or_eight_hex_digits() {
        assert_eq!(norm_sid("C479").as_deref(), Some("c479"));
        assert_eq!(norm_sid("E1C47901").as_deref(), Some("e1c47901"));
        assert!(norm_sid("C47").is_none());
        assert!(norm_sid("C4790").is_none());
        assert!(norm_sid("E1C4790112").is_none());
    }
}
