//! Counting formulas
//!
//! | id | method     | formula                         |
//! |----|------------|---------------------------------|
//! | 0  | Naive      | `trace(A^3) / 6`                |
//! | 1  | Burkhardt  | `sum((A * A) .* A) / 6`         |
//! | 2  | Cohen      | `sum((L * U) .* A) / 2`         |
//! | 3  | Sandia     | `sum((L * L) .* L)`             |
//! | 4  | Sandia2    | `sum((U * U) .* U)`             |
//! | 5  | SandiaDot  | `sum((L * U') .* L)`            |
//! | 6  | SandiaDot2 | `sum((U * L') .* U)`            |
//!
//! `L` and `U` are the strictly lower and upper triangular parts of `A`.

use super::error::{TriangleCountError, TriangleCountResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Triangle counting formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Naive = 0,
    Burkhardt = 1,
    Cohen = 2,
    Sandia = 3,
    Sandia2 = 4,
    SandiaDot = 5,
    SandiaDot2 = 6,
}

impl Method {
    /// All methods in id order
    pub const ALL: [Method; 7] = [
        Method::Naive,
        Method::Burkhardt,
        Method::Cohen,
        Method::Sandia,
        Method::Sandia2,
        Method::SandiaDot,
        Method::SandiaDot2,
    ];

    /// Order of a comparison run: ids 1 through 6, then the naive cube
    pub const COMPARISON_ORDER: [Method; 7] = [
        Method::Burkhardt,
        Method::Cohen,
        Method::Sandia,
        Method::Sandia2,
        Method::SandiaDot,
        Method::SandiaDot2,
        Method::Naive,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> TriangleCountResult<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Method::ALL.get(i).copied())
            .ok_or(TriangleCountError::InvalidMethod(id))
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Naive => "Naive",
            Method::Burkhardt => "Burkhardt",
            Method::Cohen => "Cohen",
            Method::Sandia => "Sandia",
            Method::Sandia2 => "Sandia2",
            Method::SandiaDot => "SandiaDot",
            Method::SandiaDot2 => "SandiaDot2",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Method::Naive => "trace(A^3) / 6",
            Method::Burkhardt => "sum((A * A) .* A) / 6",
            Method::Cohen => "sum((L * U) .* A) / 2",
            Method::Sandia => "sum((L * L) .* L)",
            Method::Sandia2 => "sum((U * U) .* U)",
            Method::SandiaDot => "sum((L * U') .* L)",
            Method::SandiaDot2 => "sum((U * L') .* U)",
        }
    }

    /// How many times the raw sum counts each triangle
    pub fn divisor(self) -> u64 {
        match self {
            // 3 vertices x 2 directions
            Method::Naive | Method::Burkhardt => 6,
            Method::Cohen => 2,
            Method::Sandia | Method::Sandia2 | Method::SandiaDot | Method::SandiaDot2 => 1,
        }
    }

    pub(crate) fn needs_lower(self) -> bool {
        matches!(
            self,
            Method::Cohen | Method::Sandia | Method::SandiaDot | Method::SandiaDot2
        )
    }

    pub(crate) fn needs_upper(self) -> bool {
        matches!(
            self,
            Method::Cohen | Method::Sandia2 | Method::SandiaDot | Method::SandiaDot2
        )
    }
}

impl TryFrom<i64> for Method {
    type Error = TriangleCountError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Method::from_id(id)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown method '{0}': expected an id 0..=6 or a method name")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Accepts an id (`"3"`) or a case-insensitive name (`"sandiadot"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Method::from_id(id).map_err(|_| ParseMethodError(s.to_string()));
        }
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for (i, method) in Method::ALL.iter().enumerate() {
            assert_eq!(method.id() as usize, i);
            assert_eq!(Method::from_id(i as i64).unwrap(), *method);
        }
    }

    #[test]
    fn test_invalid_ids() {
        assert_eq!(Method::from_id(7), Err(TriangleCountError::InvalidMethod(7)));
        assert_eq!(Method::from_id(-1), Err(TriangleCountError::InvalidMethod(-1)));
        assert!(Method::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Burkhardt".parse::<Method>().unwrap(), Method::Burkhardt);
        assert_eq!("sandiadot2".parse::<Method>().unwrap(), Method::SandiaDot2);
        assert_eq!(" 4 ".parse::<Method>().unwrap(), Method::Sandia2);
        assert!("9".parse::<Method>().is_err());
        assert!("gustavson".parse::<Method>().is_err());
    }

    #[test]
    fn test_divisors() {
        assert_eq!(Method::Naive.divisor(), 6);
        assert_eq!(Method::Burkhardt.divisor(), 6);
        assert_eq!(Method::Cohen.divisor(), 2);
        assert!(Method::ALL[3..].iter().all(|m| m.divisor() == 1));
    }

    #[test]
    fn test_comparison_order_covers_all() {
        let mut ids: Vec<u8> = Method::COMPARISON_ORDER.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..7).collect::<Vec<u8>>());
        assert_eq!(Method::COMPARISON_ORDER[6], Method::Naive);
    }
}
