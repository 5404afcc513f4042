//! Linear quiz state machine.
//!
//! `Landing -> Question(0) -> ... -> Question(n-1) -> Result(code)`, with
//! `back` stepping one question at a time and `restart` returning to the
//! landing screen. Answers are keyed by question index, so revisiting a
//! question overwrites its earlier answer.

use std::collections::BTreeMap;
use std::sync::Arc;

use protolab_types::{Letter, ResultCode, SessionId};
use tokio::task::JoinHandle;

use crate::error::QuizError;
use crate::profile::AgentProfile;
use crate::question::Question;
use crate::quiz::Quiz;
use crate::sink::{ResultSink, ResultSubmission, dispatch};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Before the first question.
    Landing,
    /// Answering the question at this index.
    Question(usize),
    /// Finished with this code.
    Result(ResultCode),
}

/// One user's pass through a [`Quiz`].
pub struct QuizSession {
    quiz: Arc<Quiz>,
    id: SessionId,
    screen: Screen,
    answers: BTreeMap<usize, Letter>,
    selection: Option<Letter>,
    sink: Option<Arc<dyn ResultSink>>,
    submission: Option<JoinHandle<()>>,
}

impl QuizSession {
    /// A session on the landing screen with no result sink.
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            quiz,
            id: SessionId::new(),
            screen: Screen::Landing,
            answers: BTreeMap::new(),
            selection: None,
            sink: None,
            submission: None,
        }
    }

    /// Send the result to `sink` when the quiz completes.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Session identifier.
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// The quiz being answered.
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Current screen.
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The highlighted answer on the current question.
    pub const fn selection(&self) -> Option<Letter> {
        self.selection
    }

    /// Recorded answers by question index.
    pub const fn answers(&self) -> &BTreeMap<usize, Letter> {
        &self.answers
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.screen {
            Screen::Question(index) => self.quiz.bank().get(index),
            Screen::Landing | Screen::Result(_) => None,
        }
    }

    /// The final code once the result screen is reached.
    pub const fn code(&self) -> Option<ResultCode> {
        match self.screen {
            Screen::Result(code) => Some(code),
            Screen::Landing | Screen::Question(_) => None,
        }
    }

    /// Profile for the final code.
    pub fn profile(&self) -> Option<&AgentProfile> {
        self.code().and_then(|code| self.quiz.profile_for(code))
    }

    /// Leave the landing screen for the first question, clearing any answers.
    pub fn start(&mut self) -> Screen {
        self.reset();
        self.screen = Screen::Question(0);
        self.screen
    }

    /// Highlight `letter` on the current question.
    ///
    /// # Errors
    ///
    /// [`QuizError::NotAnswering`] off a question screen, or
    /// [`QuizError::InvalidSelection`] if the question does not offer `letter`.
    pub fn select(&mut self, letter: Letter) -> Result<(), QuizError> {
        let Screen::Question(index) = self.screen else {
            return Err(QuizError::NotAnswering);
        };
        let offered = self.current_question().is_some_and(|q| q.offers(letter));
        if !offered {
            return Err(QuizError::InvalidSelection { question: index, letter });
        }
        self.selection = Some(letter);
        Ok(())
    }

    /// Record the selection and move forward.
    ///
    /// On the last question this computes the code, shows the result and
    /// dispatches one submission to the sink.
    ///
    /// # Errors
    ///
    /// [`QuizError::NotAnswering`] off a question screen,
    /// [`QuizError::NoSelection`] with nothing highlighted, or
    /// [`QuizError::Incomplete`] if the answers leave a dimension empty.
    pub fn next(&mut self) -> Result<Screen, QuizError> {
        let Screen::Question(index) = self.screen else {
            return Err(QuizError::NotAnswering);
        };
        let letter = self.selection.ok_or(QuizError::NoSelection)?;
        self.answers.insert(index, letter);

        let following = index.saturating_add(1);
        if following < self.quiz.bank().len() {
            self.screen = Screen::Question(following);
            self.selection = self.answers.get(&following).copied();
            return Ok(self.screen);
        }

        let code = self.quiz.score(self.answers.iter().map(|(i, l)| (*i, *l)))?;
        self.screen = Screen::Result(code);
        self.selection = None;
        tracing::debug!(session = %self.id, %code, "quiz completed");
        self.submit(code);
        Ok(self.screen)
    }

    /// Step back one question. From the first question, return to the
    /// landing screen and forget every answer.
    ///
    /// # Errors
    ///
    /// [`QuizError::NotAnswering`] off a question screen.
    pub fn back(&mut self) -> Result<Screen, QuizError> {
        let Screen::Question(index) = self.screen else {
            return Err(QuizError::NotAnswering);
        };
        match index.checked_sub(1) {
            Some(previous) => {
                self.screen = Screen::Question(previous);
                self.selection = self.answers.get(&previous).copied();
            }
            None => self.restart(),
        }
        Ok(self.screen)
    }

    /// Return to the landing screen with no answers.
    pub fn restart(&mut self) {
        self.reset();
        self.screen = Screen::Landing;
    }

    /// Completion percentage: answered questions over total, 100 on the result screen.
    pub fn progress_percent(&self) -> u8 {
        match self.screen {
            Screen::Landing => 0,
            Screen::Result(_) => 100,
            Screen::Question(index) => {
                let percent = index.saturating_mul(100).checked_div(self.quiz.bank().len()).unwrap_or(0);
                u8::try_from(percent).unwrap_or(100)
            }
        }
    }

    /// The in-flight submission task, if one was dispatched.
    pub const fn take_submission(&mut self) -> Option<JoinHandle<()>> {
        self.submission.take()
    }

    fn reset(&mut self) {
        self.answers.clear();
        self.selection = None;
    }

    fn submit(&mut self, sequence: ResultCode) {
        let Some(sink) = &self.sink else {
            return;
        };
        let Some(profile) = self.quiz.profile_for(sequence) else {
            tracing::warn!(session = %self.id, %sequence, "no profile for result, not submitted");
            return;
        };
        let submission = ResultSubmission { agent: profile.name.clone(), sequence };
        self.submission = dispatch(sink.as_ref(), submission);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sink::tests::RecordingSink;
    use Letter::{A, C, D, I, L, S, T, U, W, Y};

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(Quiz::standard().unwrap()))
    }

    fn answer(session: &mut QuizSession, letter: Letter) -> Screen {
        session.select(letter).unwrap();
        session.next().unwrap()
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    #[test]
    fn start_enters_first_question_with_no_answers() {
        let mut s = session();
        assert_eq!(s.screen(), Screen::Landing);
        assert_eq!(s.start(), Screen::Question(0));
        assert!(s.answers().is_empty());
        assert_eq!(s.current_question().unwrap().dimension, protolab_types::Dimension::WorkLife);
    }

    #[test]
    fn select_must_match_current_question() {
        let mut s = session();
        assert!(matches!(s.select(W), Err(QuizError::NotAnswering)));
        s.start();
        assert!(matches!(s.select(T), Err(QuizError::InvalidSelection { question: 0, letter: T })));
        s.select(L).unwrap();
        assert_eq!(s.selection(), Some(L));
    }

    #[test]
    fn next_requires_a_selection() {
        let mut s = session();
        s.start();
        assert!(matches!(s.next(), Err(QuizError::NoSelection)));
        assert_eq!(s.screen(), Screen::Question(0));
    }

    #[test]
    fn back_from_first_question_resets_to_landing() {
        let mut s = session();
        s.start();
        s.select(W).unwrap();
        assert_eq!(s.back().unwrap(), Screen::Landing);
        assert!(s.answers().is_empty());
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn back_and_next_restore_stored_answers() {
        let mut s = session();
        s.start();
        answer(&mut s, L);
        answer(&mut s, T);
        assert_eq!(s.screen(), Screen::Question(2));
        assert_eq!(s.selection(), None);

        assert_eq!(s.back().unwrap(), Screen::Question(1));
        assert_eq!(s.selection(), Some(T));
        assert_eq!(s.back().unwrap(), Screen::Question(0));
        assert_eq!(s.selection(), Some(L));

        // Change the first answer, then move forward again.
        s.select(W).unwrap();
        assert_eq!(s.next().unwrap(), Screen::Question(1));
        assert_eq!(s.selection(), Some(T));
        assert_eq!(s.answers().get(&0), Some(&W));
    }

    #[test]
    fn progress_tracks_question_index() {
        let mut s = session();
        assert_eq!(s.progress_percent(), 0);
        s.start();
        assert_eq!(s.progress_percent(), 0);
        answer(&mut s, W);
        assert_eq!(s.progress_percent(), 20);
        answer(&mut s, T);
        answer(&mut s, S);
        answer(&mut s, A);
        assert_eq!(s.progress_percent(), 80);
        answer(&mut s, D);
        assert_eq!(s.progress_percent(), 100);
    }

    // -----------------------------------------------------------------------
    // Completion
    // -----------------------------------------------------------------------

    #[test]
    fn completing_without_sink_shows_result() {
        let mut s = session();
        s.start();
        for letter in [L, I, U, C] {
            answer(&mut s, letter);
        }
        let screen = answer(&mut s, Y);
        let code: ResultCode = "LIUCY".parse().unwrap();
        assert_eq!(screen, Screen::Result(code));
        assert!(s.profile().is_some());
        assert!(s.take_submission().is_none());
        assert!(matches!(s.back(), Err(QuizError::NotAnswering)));

        s.restart();
        assert_eq!(s.screen(), Screen::Landing);
        assert!(s.answers().is_empty());
    }

    #[tokio::test]
    async fn completion_submits_exactly_once() {
        let sink = Arc::new(RecordingSink::default());
        let received = Arc::clone(&sink.received);
        let mut s = session().with_sink(sink);
        s.start();
        for letter in [W, T, S, A, D] {
            answer(&mut s, letter);
        }
        s.take_submission().unwrap().await.unwrap();
        assert!(s.take_submission().is_none());

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let expected = s.profile().unwrap().name.clone();
        assert_eq!(received[0], ResultSubmission { agent: expected, sequence: "WTSAD".parse().unwrap() });
    }
}
