//! Personality quiz engine.
//!
//! A [`Quiz`] pairs a validated [`QuestionBank`] with a complete
//! [`ProfileTable`]. Each [`QuizSession`] walks the questions, tallies one
//! vote per answer into five binary dimensions, and maps the winning
//! letters to a profile. Completed results go to a [`ResultSink`] on a
//! spawned task.
//!
//! # Modules
//!
//! - [`question`] -- Questions and bank validation
//! - [`profile`] -- Result-code to profile lookup
//! - [`tally`] -- Majority vote with first-to-max tie-break
//! - [`quiz`] -- The shared quiz definition
//! - [`session`] -- Per-user state machine
//! - [`sink`] -- Fire-and-forget result delivery

pub mod error;
pub mod profile;
pub mod question;
pub mod quiz;
pub mod session;
pub mod sink;
mod standard;
pub mod tally;

pub use error::QuizError;
pub use profile::{AgentProfile, ProfileTable};
pub use question::{AnswerOption, Question, QuestionBank};
pub use quiz::Quiz;
pub use session::{QuizSession, Screen};
pub use sink::{ResultSink, ResultSubmission, SinkError, SubmitOutcome, dispatch};
pub use tally::Tally;
