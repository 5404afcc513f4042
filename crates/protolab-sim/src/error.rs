//! Error types for the simulator.

/// Errors raised while constructing a simulator.
///
/// Ticks and pointer operations never fail; only configuration is checked.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration value is out of range.
    #[error("invalid simulator config: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
