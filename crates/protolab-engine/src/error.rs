//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and shutdown
//! so `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: protolab_core::ConfigError,
    },

    /// The question bank or profile table is unusable.
    #[error("quiz error: {source}")]
    Quiz {
        /// The underlying quiz error.
        #[from]
        source: protolab_quiz::QuizError,
    },

    /// The result store could not be opened.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: protolab_db::DbError,
    },

    /// The simulator rejected its configuration.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulator error.
        #[from]
        source: protolab_sim::SimError,
    },

    /// The frame loop task failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: protolab_core::RunnerError,
    },

    /// The API server failed to start.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: protolab_api::ServerError,
    },
}
