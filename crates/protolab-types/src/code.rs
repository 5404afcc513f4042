//! Five-letter personality result codes.
//!
//! A [`ResultCode`] holds one letter per [`Dimension`], in
//! [`Dimension::ALL`] order. The type can only hold valid codes, so there
//! are exactly 32 values.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Dimension, Letter};

/// Number of distinct result codes (two letters on each of five axes).
pub const CODE_COUNT: usize = 32;

/// Error returned when a string is not a valid result code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    /// The input did not contain exactly five letters.
    #[error("result code must have 5 letters, got {0}")]
    Length(usize),

    /// A character is not a letter of the dimension at that position.
    #[error("'{found}' is not a {dimension} letter (position {position})")]
    WrongLetter {
        /// Zero-based position in the code.
        position: usize,
        /// The dimension expected at that position.
        dimension: Dimension,
        /// The offending character.
        found: char,
    },
}

/// A complete five-letter personality code such as `WTSAD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResultCode([Letter; 5]);

impl ResultCode {
    /// Build a code from letters in dimension order.
    ///
    /// Returns `None` if any letter belongs to the wrong dimension.
    pub fn new(letters: [Letter; 5]) -> Option<Self> {
        letters
            .iter()
            .zip(Dimension::ALL)
            .all(|(letter, dim)| letter.dimension() == dim)
            .then_some(Self(letters))
    }

    /// Build a code by choosing, for each dimension, the letter returned by `pick`.
    pub fn from_fn(mut pick: impl FnMut(Dimension) -> Letter) -> Option<Self> {
        Self::new(Dimension::ALL.map(&mut pick))
    }

    /// The letters in dimension order.
    pub const fn letters(self) -> [Letter; 5] {
        self.0
    }

    /// The letter chosen for `dimension`.
    pub const fn letter(self, dimension: Dimension) -> Letter {
        let [wl, ti, su, ac, yd] = self.0;
        match dimension {
            Dimension::WorkLife => wl,
            Dimension::Collaboration => ti,
            Dimension::Structure => su,
            Dimension::Thinking => ac,
            Dimension::Approach => yd,
        }
    }

    /// Enumerate all 32 codes. The first is `WTSAD`, the last `LIUCY`.
    pub fn all() -> Vec<Self> {
        (0..CODE_COUNT)
            .map(|mask| {
                let letters = Dimension::ALL.map(|dim| {
                    let [first, second] = dim.letters();
                    let bit = u32::try_from(dim.position()).unwrap_or(0);
                    if mask.checked_shr(bit).unwrap_or(0) & 1 == 0 {
                        first
                    } else {
                        second
                    }
                });
                Self(letters)
            })
            .collect()
    }

    /// The five human-readable binary choices this code represents.
    pub fn choices(self) -> Vec<Choice> {
        Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let letter = self.letter(dimension);
                Choice {
                    dimension,
                    heading: dimension.heading().to_owned(),
                    letter,
                    label: letter.label().to_owned(),
                }
            })
            .collect()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for ResultCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != Dimension::ALL.len() {
            return Err(CodeParseError::Length(chars.len()));
        }

        let mut letters = [Letter::W; 5];
        for ((slot, ch), dimension) in letters.iter_mut().zip(chars).zip(Dimension::ALL) {
            *slot = Letter::from_char(ch)
                .filter(|l| l.dimension() == dimension)
                .ok_or(CodeParseError::WrongLetter {
                    position: dimension.position(),
                    dimension,
                    found: ch,
                })?;
        }
        Ok(Self(letters))
    }
}

impl TryFrom<String> for ResultCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultCode> for String {
    fn from(code: ResultCode) -> Self {
        code.to_string()
    }
}

/// One binary choice on the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Choice {
    /// The dimension this choice answers.
    pub dimension: Dimension,
    /// Upper-case heading for the dimension.
    pub heading: String,
    /// The letter that won.
    pub letter: Letter,
    /// The winning letter's label.
    pub label: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn all_codes_are_distinct() {
        let codes = ResultCode::all();
        assert_eq!(codes.len(), CODE_COUNT);
        let unique: BTreeSet<_> = codes.iter().copied().collect();
        assert_eq!(unique.len(), CODE_COUNT);
        assert_eq!(codes.first().unwrap().to_string(), "WTSAD");
        assert_eq!(codes.last().unwrap().to_string(), "LIUCY");
    }

    #[test]
    fn parses_and_displays() {
        let code: ResultCode = "lisay".parse().unwrap();
        assert_eq!(code.to_string(), "LISAY");
        assert_eq!(code.letter(Dimension::Collaboration), Letter::I);
    }

    #[test]
    fn rejects_bad_codes() {
        assert_eq!("WTSA".parse::<ResultCode>(), Err(CodeParseError::Length(4)));
        let err = "TWSAD".parse::<ResultCode>().unwrap_err();
        assert!(matches!(err, CodeParseError::WrongLetter { position: 0, .. }));
    }

    #[test]
    fn new_rejects_misplaced_letters() {
        assert!(ResultCode::new([Letter::W, Letter::T, Letter::S, Letter::A, Letter::D]).is_some());
        assert!(ResultCode::new([Letter::T, Letter::W, Letter::S, Letter::A, Letter::D]).is_none());
    }

    #[test]
    fn serializes_as_string() {
        let code: ResultCode = "WISCY".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"WISCY\"");
        let back: ResultCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<ResultCode>("\"XXXXX\"").is_err());
    }

    #[test]
    fn choices_follow_dimension_order() {
        let code: ResultCode = "LTUAY".parse().unwrap();
        let labels: Vec<_> = code.choices().into_iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Work to live", "Collaborative", "Unstructured", "Abstract", "Harmony"]
        );
    }
}
