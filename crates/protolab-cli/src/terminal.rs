//! Line-based quiz front-end.
//!
//! Drives a [`QuizSession`] from text input: an option number selects and
//! advances, `b` steps back, `q` quits.

use std::io::Write;

use protolab_quiz::{AgentProfile, QuizError, QuizSession, Screen};
use protolab_types::ResultCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::CliError;

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Every question answered.
    Completed(ResultCode),
    /// The user quit or input ended first.
    Quit,
}

/// One parsed input line on a question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Option(usize),
    Back,
    Quit,
    Unknown,
}

fn parse_key(line: &str) -> Key {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Key::Quit;
    }
    if line.eq_ignore_ascii_case("b") {
        return Key::Back;
    }
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .map_or(Key::Unknown, Key::Option)
}

/// Run `session` to completion, reading from `input` and drawing to `out`.
pub async fn run_quiz<R, W>(session: &mut QuizSession, mut input: R, out: &mut W) -> Result<QuizOutcome, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = String::new();
    loop {
        match session.screen() {
            Screen::Landing => {
                writeln!(out, "Which Protolab agent are you?")?;
                write!(out, "Press Enter to start, q to quit: ")?;
                out.flush()?;
                if !read_line(&mut input, &mut line).await? || parse_key(&line) == Key::Quit {
                    return Ok(QuizOutcome::Quit);
                }
                session.start();
            }
            Screen::Question(index) => {
                draw_question(session, index, out)?;
                if !read_line(&mut input, &mut line).await? {
                    return Ok(QuizOutcome::Quit);
                }
                match parse_key(&line) {
                    Key::Quit => return Ok(QuizOutcome::Quit),
                    Key::Back => {
                        session.back()?;
                    }
                    Key::Option(choice) => answer(session, index, choice, out)?,
                    Key::Unknown => writeln!(out, "Type an option number, b to go back or q to quit.")?,
                }
            }
            Screen::Result(code) => {
                if let Some(profile) = session.profile() {
                    draw_result(code, profile, out)?;
                }
                return Ok(QuizOutcome::Completed(code));
            }
        }
    }
}

/// Read one line into `buf`. `false` at end of input.
async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R, buf: &mut String) -> Result<bool, CliError> {
    buf.clear();
    Ok(input.read_line(buf).await? > 0)
}

fn answer<W: Write>(session: &mut QuizSession, index: usize, choice: usize, out: &mut W) -> Result<(), CliError> {
    let letter = session.quiz().bank().get(index).and_then(|q| q.options.get(choice)).map(|o| o.letter);
    let Some(letter) = letter else {
        writeln!(out, "No option {}.", choice.saturating_add(1))?;
        return Ok(());
    };
    match session.select(letter).and_then(|()| session.next()) {
        Ok(_) => Ok(()),
        Err(e @ QuizError::InvalidSelection { .. }) => {
            writeln!(out, "{e}")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn draw_question<W: Write>(session: &QuizSession, index: usize, out: &mut W) -> Result<(), CliError> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let total = session.quiz().bank().len();
    writeln!(out)?;
    writeln!(out, "[{}/{total}] {}% {}", index.saturating_add(1), session.progress_percent(), question.text)?;
    for (n, option) in question.options.iter().enumerate() {
        let label = option.text.as_deref().or(option.image.as_deref()).unwrap_or_default();
        let marker = if session.selection() == Some(option.letter) { '*' } else { ' ' };
        writeln!(out, " {marker}{}) {label}", n.saturating_add(1))?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn draw_result<W: Write>(code: ResultCode, profile: &AgentProfile, out: &mut W) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "You are {} ({code})", profile.name)?;
    writeln!(out, "Icon: {}", profile.icon_path())?;
    for choice in code.choices() {
        writeln!(out, "  {}: {} ({})", choice.heading, choice.label, choice.letter)?;
    }
    writeln!(out, "Strengths:")?;
    for strength in &profile.strengths {
        writeln!(out, "  + {strength}")?;
    }
    writeln!(out, "Weaknesses:")?;
    for weakness in &profile.weaknesses {
        writeln!(out, "  - {weakness}")?;
    }
    Ok(())
}
