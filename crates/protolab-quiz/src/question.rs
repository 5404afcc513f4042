//! Questions and the validated question bank.
//!
//! Each question votes on one dimension and offers exactly two options, one
//! per letter of that dimension. Several questions may vote on the same
//! dimension; every dimension must be covered at least once.

use std::collections::BTreeSet;
use std::path::Path;

use protolab_types::{Dimension, Letter};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::standard::QUESTIONS;

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// The letter this answer votes for.
    pub letter: Letter,
    /// Label text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image reference shown instead of (or beside) the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A prompt tagged with the dimension it votes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown to the user.
    pub text: String,
    /// Dimension the answer counts toward.
    pub dimension: Dimension,
    /// Exactly two options.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Whether `letter` is one of this question's options.
    pub fn offers(&self, letter: Letter) -> bool {
        self.options.iter().any(|o| o.letter == letter)
    }
}

#[derive(Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

/// An ordered, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    ///
    /// # Errors
    ///
    /// Returns a [`QuizError`] describing the first problem found: an empty
    /// bank, a question without exactly two options, a letter from the
    /// wrong dimension, a repeated letter, an option with no content, or a
    /// dimension no question covers.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (index, question) in questions.iter().enumerate() {
            validate_question(index, question)?;
        }
        let covered: BTreeSet<Dimension> = questions.iter().map(|q| q.dimension).collect();
        if let Some(missing) = Dimension::ALL.into_iter().find(|d| !covered.contains(d)) {
            return Err(QuizError::UncoveredDimension(missing));
        }
        Ok(Self { questions })
    }

    /// The five questions of the stock quiz, one per dimension.
    pub fn standard() -> Self {
        let questions = QUESTIONS
            .iter()
            .filter_map(|seed| {
                let dimension = Dimension::from_key(seed.dimension)?;
                let options = seed
                    .options
                    .iter()
                    .filter_map(|&(letter, text, image)| {
                        Some(AnswerOption {
                            letter: Letter::from_char(letter)?,
                            text: text.map(String::from),
                            image: image.map(String::from),
                        })
                    })
                    .collect();
                Some(Question { text: seed.text.to_owned(), dimension, options })
            })
            .collect();
        Self { questions }
    }

    /// Parse a bank from YAML with a top-level `questions:` list.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Yaml`] for malformed YAML, or a validation error.
    pub fn from_yaml(yaml: &str) -> Result<Self, QuizError> {
        let file: BankFile = serde_yml::from_str(yaml)?;
        Self::new(file.questions)
    }

    /// Load a bank from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Io`] if the file cannot be read, otherwise as
    /// [`QuestionBank::from_yaml`].
    pub fn from_file(path: &Path) -> Result<Self, QuizError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// All questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at `index`.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions (never zero).
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(index: usize, question: &Question) -> Result<(), QuizError> {
    let [first, second] = question.options.as_slice() else {
        return Err(QuizError::OptionCount { question: index, count: question.options.len() });
    };
    for option in [first, second] {
        if option.letter.dimension() != question.dimension {
            return Err(QuizError::ForeignLetter {
                question: index,
                letter: option.letter,
                dimension: question.dimension,
            });
        }
        let has_text = option.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_image = option.image.as_deref().is_some_and(|i| !i.trim().is_empty());
        if !has_text && !has_image {
            return Err(QuizError::EmptyOption { question: index, letter: option.letter });
        }
    }
    if first.letter == second.letter {
        return Err(QuizError::DuplicateLetter { question: index, letter: first.letter });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_is_valid() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 5);
        QuestionBank::new(bank.questions().to_vec()).unwrap();
        let dims: Vec<Dimension> = bank.questions().iter().map(|q| q.dimension).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }

    #[test]
    fn image_only_options_are_accepted() {
        let bank = QuestionBank::standard();
        let q = bank.get(1).unwrap();
        assert!(q.options.iter().all(|o| o.text.is_none() && o.image.is_some()));
        assert!(q.offers(Letter::I) && q.offers(Letter::T));
        assert!(!q.offers(Letter::W));
    }

    #[test]
    fn rejects_structural_problems() {
        assert!(matches!(QuestionBank::new(Vec::new()), Err(QuizError::EmptyBank)));

        let mut questions = QuestionBank::standard().questions().to_vec();
        questions[0].options.pop();
        assert!(matches!(
            QuestionBank::new(questions),
            Err(QuizError::OptionCount { question: 0, count: 1 })
        ));

        let mut questions = QuestionBank::standard().questions().to_vec();
        questions[2].options[1].letter = Letter::D;
        assert!(matches!(QuestionBank::new(questions), Err(QuizError::ForeignLetter { question: 2, .. })));

        let mut questions = QuestionBank::standard().questions().to_vec();
        questions[0].options[1].letter = Letter::L;
        assert!(matches!(QuestionBank::new(questions), Err(QuizError::DuplicateLetter { question: 0, .. })));

        let mut questions = QuestionBank::standard().questions().to_vec();
        questions[4].options[0].text = None;
        assert!(matches!(QuestionBank::new(questions), Err(QuizError::EmptyOption { question: 4, .. })));

        let mut questions = QuestionBank::standard().questions().to_vec();
        questions.remove(3);
        assert!(matches!(
            QuestionBank::new(questions),
            Err(QuizError::UncoveredDimension(Dimension::Thinking))
        ));
    }

    #[test]
    fn loads_yaml_with_repeated_dimensions() {
        let yaml = r"
questions:
  - text: Office or home?
    dimension: WorkLife
    options:
      - { letter: W, text: Office }
      - { letter: L, text: Home }
  - text: Weekend plans?
    dimension: WorkLife
    options:
      - { letter: W, text: Side project }
      - { letter: L, text: Hiking }
  - text: Team or solo?
    dimension: Collaboration
    options:
      - { letter: T, text: Team }
      - { letter: I, text: Solo }
  - text: Plan or improvise?
    dimension: Structure
    options:
      - { letter: S, text: Plan }
      - { letter: U, text: Improvise }
  - text: Theory or practice?
    dimension: Thinking
    options:
      - { letter: A, text: Theory }
      - { letter: C, text: Practice }
  - text: Win or agree?
    dimension: Approach
    options:
      - { letter: D, text: Win }
      - { letter: Y, image: /img/agree.png }
";
        let bank = QuestionBank::from_yaml(yaml).unwrap();
        assert_eq!(bank.len(), 6);
        assert!(matches!(QuestionBank::from_yaml("questions: 12"), Err(QuizError::Yaml { .. })));
    }
}
