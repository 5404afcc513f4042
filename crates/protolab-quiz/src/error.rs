//! Error types for the quiz engine.

use protolab_types::{Dimension, Letter, ResultCode};

/// Errors from building a quiz or driving a session.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The question bank has no questions.
    #[error("question bank is empty")]
    EmptyBank,

    /// A question does not have exactly two options.
    #[error("question {question} has {count} options, expected 2")]
    OptionCount {
        /// Zero-based question index.
        question: usize,
        /// Number of options found.
        count: usize,
    },

    /// An option letter does not belong to the question's dimension.
    #[error("question {question}: letter {letter} does not belong to dimension {dimension}")]
    ForeignLetter {
        /// Zero-based question index.
        question: usize,
        /// The offending letter.
        letter: Letter,
        /// The question's dimension.
        dimension: Dimension,
    },

    /// Both options of a question carry the same letter.
    #[error("question {question}: both options use letter {letter}")]
    DuplicateLetter {
        /// Zero-based question index.
        question: usize,
        /// The repeated letter.
        letter: Letter,
    },

    /// An option has neither text nor an image.
    #[error("question {question}: option {letter} has neither text nor image")]
    EmptyOption {
        /// Zero-based question index.
        question: usize,
        /// The option's letter.
        letter: Letter,
    },

    /// No question votes on a dimension, so its letter could never be decided.
    #[error("no question covers dimension {0}")]
    UncoveredDimension(Dimension),

    /// Some result codes have no profile.
    #[error("no profile for {} result code(s): {}", .0.len(), join_codes(.0))]
    MissingProfiles(Vec<ResultCode>),

    /// The selected letter is not an option of the current question.
    #[error("letter {letter} is not an option of question {question}")]
    InvalidSelection {
        /// Zero-based question index.
        question: usize,
        /// The rejected letter.
        letter: Letter,
    },

    /// `next` was called with nothing selected.
    #[error("no answer selected")]
    NoSelection,

    /// The recorded answers leave a dimension without votes.
    #[error("answers do not cover dimension {0}")]
    Incomplete(Dimension),

    /// The operation needs the session to be on a question screen.
    #[error("session is not on a question")]
    NotAnswering,

    /// Failed to read a question bank file.
    #[error("failed to read question bank: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse a question bank file.
    #[error("failed to parse question bank YAML: {source}")]
    Yaml {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },
}

fn join_codes(codes: &[ResultCode]) -> String {
    codes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
