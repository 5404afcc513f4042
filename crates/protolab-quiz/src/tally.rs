//! Majority-vote scoring.
//!
//! Votes are replayed in question order. Per dimension the letter with the
//! most votes wins; on a tie, the winner is the letter that reached the
//! maximum count first.

use std::collections::BTreeMap;

use protolab_types::{Dimension, Letter, ResultCode};

/// Vote counts for every dimension, rebuilt from the full answer set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    votes: BTreeMap<Dimension, Vec<Letter>>,
}

impl Tally {
    /// Build a tally from `(dimension, letter)` votes in question order.
    ///
    /// Votes whose letter does not belong to the tagged dimension are ignored.
    pub fn from_votes(votes: impl IntoIterator<Item = (Dimension, Letter)>) -> Self {
        let mut tally = Self::default();
        for (dimension, letter) in votes {
            if letter.dimension() == dimension {
                tally.votes.entry(dimension).or_default().push(letter);
            }
        }
        tally
    }

    /// How many votes `letter` received.
    pub fn count(&self, letter: Letter) -> usize {
        self.votes
            .get(&letter.dimension())
            .map_or(0, |v| v.iter().filter(|l| **l == letter).count())
    }

    /// The winning letter for `dimension`, or `None` if it has no votes.
    pub fn winner(&self, dimension: Dimension) -> Option<Letter> {
        let votes = self.votes.get(&dimension)?;
        let max = dimension
            .letters()
            .into_iter()
            .map(|letter| votes.iter().filter(|l| **l == letter).count())
            .max()?;

        let mut running: BTreeMap<Letter, usize> = BTreeMap::new();
        for letter in votes {
            let count = running.entry(*letter).or_insert(0);
            *count = count.saturating_add(1);
            if *count == max {
                return Some(*letter);
            }
        }
        None
    }

    /// The five-letter code, or the first dimension without votes.
    pub fn code(&self) -> Result<ResultCode, Dimension> {
        let [wl, ti, su, ac, yd] = Dimension::ALL.map(|d| self.winner(d).ok_or(d));
        // Winners always come from their own dimension, so `new` cannot fail.
        ResultCode::new([wl?, ti?, su?, ac?, yd?]).ok_or(Dimension::WorkLife)
    }
}
