//! Terminal client for Protolab.
//!
//! ```text
//! protolab quiz                 take the quiz; the result is posted to the API
//! protolab leaderboard          show agents ranked by result count
//! protolab clear-agent <name>   remove every result for one agent
//! ```
//!
//! The API base URL comes from `PROTOLAB_API_URL`.

mod client;
mod config;
mod error;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use protolab_quiz::{ProfileTable, QuestionBank, Quiz, QuizSession};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::client::{ApiClient, HttpResultSink};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::terminal::QuizOutcome;

const USAGE: &str = "usage: protolab [quiz | leaderboard | clear-agent <name>]";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quiz,
    Leaderboard,
    ClearAgent(String),
    Help,
}

impl Command {
    /// Parse arguments after the program name.
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let Some(command) = args.next() else {
            return Ok(Self::Quiz);
        };
        let rest: Vec<String> = args.collect();
        match (command.as_str(), rest.is_empty()) {
            ("quiz", true) => Ok(Self::Quiz),
            ("leaderboard", true) => Ok(Self::Leaderboard),
            ("clear-agent", false) => Ok(Self::ClearAgent(rest.join(" "))),
            ("help" | "-h" | "--help", _) => Ok(Self::Help),
            _ => Err(CliError::Usage(USAGE.to_owned())),
        }
    }
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error on bad arguments, configuration or API failures.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the quiz screens.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let command = Command::parse(std::env::args().skip(1))?;
    let config = CliConfig::from_env()?;
    info!(api_url = config.api_url, ?command, "protolab starting");

    let client = ApiClient::new(&config)?;
    match command {
        Command::Quiz => take_quiz(&config, client).await,
        Command::Leaderboard => show_leaderboard(&client).await,
        Command::ClearAgent(agent) => clear_agent(&client, &agent).await,
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

async fn take_quiz(config: &CliConfig, client: ApiClient) -> anyhow::Result<()> {
    let quiz = match &config.questions_file {
        Some(path) => {
            let bank = QuestionBank::from_file(path)
                .with_context(|| format!("failed to load questions from {}", path.display()))?;
            Quiz::new(bank, ProfileTable::standard())?
        }
        None => Quiz::standard()?,
    };

    let mut session = QuizSession::new(Arc::new(quiz)).with_sink(Arc::new(HttpResultSink::new(client)));
    let outcome = terminal::run_quiz(&mut session, BufReader::new(tokio::io::stdin()), &mut std::io::stdout()).await?;

    if let QuizOutcome::Completed(code) = outcome {
        info!(%code, "quiz completed");
        // Give the fire-and-forget submission a chance to land before exit.
        if let Some(task) = session.take_submission() {
            match tokio::time::timeout(config.request_timeout, task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(error = %e, "result submission task failed"),
                Err(_) => warn!("result submission still pending at exit"),
            }
        }
    }
    Ok(())
}

async fn show_leaderboard(client: &ApiClient) -> anyhow::Result<()> {
    let board = client.leaderboard().await.context("could not fetch the leaderboard")?;
    if board.leaderboard.is_empty() {
        println!("No results yet.");
        return Ok(());
    }
    for (rank, entry) in board.leaderboard.iter().enumerate() {
        println!("{:>3}. {:<32} {:>5}", rank.saturating_add(1), entry.agent, entry.count);
    }
    println!("{} results", board.total_results);
    Ok(())
}

async fn clear_agent(client: &ApiClient, agent: &str) -> anyhow::Result<()> {
    let cleared = client.clear_agent(agent).await.with_context(|| format!("could not clear {agent}"))?;
    println!("{} ({} removed, {} left)", cleared.message, cleared.removed_count, cleared.total_results);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        Command::parse(args.iter().map(|a| (*a).to_owned()))
    }

    #[test]
    fn quiz_is_the_default() {
        assert_eq!(parse(&[]).unwrap(), Command::Quiz);
        assert_eq!(parse(&["quiz"]).unwrap(), Command::Quiz);
    }

    #[test]
    fn clear_agent_joins_the_name() {
        assert_eq!(parse(&["clear-agent", "Clippy"]).unwrap(), Command::ClearAgent("Clippy".to_owned()));
        assert_eq!(parse(&["clear-agent", "Office", "Dog"]).unwrap(), Command::ClearAgent("Office Dog".to_owned()));
    }

    #[test]
    fn bad_arguments_print_usage() {
        assert!(matches!(parse(&["clear-agent"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["leaderboard", "extra"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["dance"]), Err(CliError::Usage(_))));
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
    }
}
