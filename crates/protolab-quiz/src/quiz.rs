//! The immutable quiz definition shared by every session.

use protolab_types::{Dimension, Letter, ResultCode};

use crate::error::QuizError;
use crate::profile::{AgentProfile, ProfileTable};
use crate::question::QuestionBank;
use crate::tally::Tally;

/// A validated question bank paired with a complete profile table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    bank: QuestionBank,
    profiles: ProfileTable,
}

impl Quiz {
    /// Pair a bank with a profile table.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::MissingProfiles`] if any result code lacks a profile.
    pub fn new(bank: QuestionBank, profiles: ProfileTable) -> Result<Self, QuizError> {
        profiles.validate_complete()?;
        Ok(Self { bank, profiles })
    }

    /// The stock five-question quiz.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in profile table is incomplete.
    pub fn standard() -> Result<Self, QuizError> {
        Self::new(QuestionBank::standard(), ProfileTable::standard())
    }

    /// The question bank.
    pub const fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The profile table.
    pub const fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Score a full answer set given as `(question index, letter)` pairs.
    ///
    /// Pairs are replayed in the order given; callers pass them in question
    /// order. Indices past the end of the bank are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Incomplete`] naming the first dimension without votes.
    pub fn score(&self, answers: impl IntoIterator<Item = (usize, Letter)>) -> Result<ResultCode, QuizError> {
        let votes = answers.into_iter().filter_map(|(index, letter)| {
            let dimension: Dimension = self.bank.get(index)?.dimension;
            Some((dimension, letter))
        });
        Tally::from_votes(votes).code().map_err(QuizError::Incomplete)
    }

    /// Profile for `code`. Always present once [`Quiz::new`] succeeded.
    pub fn profile_for(&self, code: ResultCode) -> Option<&AgentProfile> {
        self.profiles.get(code)
    }
}
