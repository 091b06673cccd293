//! Unified error types and result handling.

use thiserror::Error;

/// Errors raised by the bot and its core logic.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid settings, page budget or page sequence
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Requested help category has no commands
    #[error("No commands found for category: {name}")]
    CategoryNotFound {
        /// Category the user asked for
        name: String,
    },

    /// Missing or unreadable environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error from the Discord client or command framework
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
