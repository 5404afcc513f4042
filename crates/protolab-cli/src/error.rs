//! Error types for the terminal client.

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line could not be understood.
    #[error("{0}")]
    Usage(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The API could not be reached or the response was unreadable.
    #[error("request failed: {0}")]
    Http(String),

    /// The API answered with an error status.
    #[error("API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response, or the raw body.
        message: String,
    },

    /// The quiz rejected an action.
    #[error("quiz error: {0}")]
    Quiz(#[from] protolab_quiz::QuizError),

    /// Terminal input or output failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
