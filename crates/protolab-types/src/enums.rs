//! Personality dimensions and their answer letters.
//!
//! The quiz scores five independent binary axes. Each axis owns exactly two
//! letters, and the order of [`Dimension::ALL`] fixes the letter position in
//! a result code (`WTSAD` reads work/life, collaboration, structure,
//! thinking, approach).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One of the five binary personality axes scored by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Dimension {
    /// "Live to work" (`W`) versus "Work to live" (`L`).
    WorkLife,
    /// Collaborative (`T`) versus Independent (`I`).
    Collaboration,
    /// Structured (`S`) versus Unstructured (`U`).
    Structure,
    /// Abstract (`A`) versus Concrete (`C`).
    Thinking,
    /// Impact (`D`) versus Harmony (`Y`).
    Approach,
}

impl Dimension {
    /// All dimensions in result-code order.
    pub const ALL: [Self; 5] = [
        Self::WorkLife,
        Self::Collaboration,
        Self::Structure,
        Self::Thinking,
        Self::Approach,
    ];

    /// Short key used in configuration files and tallies (`WL`, `TI`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::WorkLife => "WL",
            Self::Collaboration => "TI",
            Self::Structure => "SU",
            Self::Thinking => "AC",
            Self::Approach => "YD",
        }
    }

    /// The two letters this dimension votes between, in display order.
    pub const fn letters(self) -> [Letter; 2] {
        match self {
            Self::WorkLife => [Letter::W, Letter::L],
            Self::Collaboration => [Letter::T, Letter::I],
            Self::Structure => [Letter::S, Letter::U],
            Self::Thinking => [Letter::A, Letter::C],
            Self::Approach => [Letter::D, Letter::Y],
        }
    }

    /// Position of this dimension inside a result code.
    pub const fn position(self) -> usize {
        match self {
            Self::WorkLife => 0,
            Self::Collaboration => 1,
            Self::Structure => 2,
            Self::Thinking => 3,
            Self::Approach => 4,
        }
    }

    /// Upper-case heading shown on the result card.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::WorkLife => "ORIENTATION",
            Self::Collaboration => "COLLABORATION",
            Self::Structure => "ORGANIZATION",
            Self::Thinking => "PERCEPTION",
            Self::Approach => "PRIORITY",
        }
    }

    /// Parse a dimension from its short key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key().eq_ignore_ascii_case(key))
    }
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Letter
// ---------------------------------------------------------------------------

/// A single answer letter. Every letter belongs to exactly one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Letter {
    /// Live to work.
    W,
    /// Work to live.
    L,
    /// Collaborative.
    T,
    /// Independent.
    I,
    /// Structured.
    S,
    /// Unstructured.
    U,
    /// Abstract.
    A,
    /// Concrete.
    C,
    /// Impact.
    D,
    /// Harmony.
    Y,
}

impl Letter {
    /// The dimension this letter votes on.
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::W | Self::L => Dimension::WorkLife,
            Self::T | Self::I => Dimension::Collaboration,
            Self::S | Self::U => Dimension::Structure,
            Self::A | Self::C => Dimension::Thinking,
            Self::D | Self::Y => Dimension::Approach,
        }
    }

    /// The character used in result codes.
    pub const fn as_char(self) -> char {
        match self {
            Self::W => 'W',
            Self::L => 'L',
            Self::T => 'T',
            Self::I => 'I',
            Self::S => 'S',
            Self::U => 'U',
            Self::A => 'A',
            Self::C => 'C',
            Self::D => 'D',
            Self::Y => 'Y',
        }
    }

    /// Parse a letter from its code character (case-insensitive).
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Self::W),
            'L' => Some(Self::L),
            'T' => Some(Self::T),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'U' => Some(Self::U),
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'Y' => Some(Self::Y),
            _ => None,
        }
    }

    /// Human-readable choice label shown on the result card.
    pub const fn label(self) -> &'static str {
        match self {
            Self::W => "Live to work",
            Self::L => "Work to live",
            Self::T => "Collaborative",
            Self::I => "Independent",
            Self::S => "Structured",
            Self::U => "Unstructured",
            Self::A => "Abstract",
            Self::C => "Concrete",
            Self::D => "Impact",
            Self::Y => "Harmony",
        }
    }
}

impl core::fmt::Display for Letter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_belongs_to_its_dimension_pair() {
        for dim in Dimension::ALL {
            for letter in dim.letters() {
                assert_eq!(letter.dimension(), dim);
            }
        }
    }

    #[test]
    fn positions_follow_all_order() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.position(), i);
        }
    }

    #[test]
    fn letters_round_trip_through_chars() {
        for dim in Dimension::ALL {
            for letter in dim.letters() {
                assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
            }
        }
        assert_eq!(Letter::from_char('w'), Some(Letter::W));
        assert_eq!(Letter::from_char('x'), None);
    }

    #[test]
    fn dimension_keys_parse() {
        assert_eq!(Dimension::from_key("yd"), Some(Dimension::Approach));
        assert_eq!(Dimension::from_key("ZZ"), None);
    }
}
