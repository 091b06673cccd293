//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `ChatCounter`'s general commands,
//! including the slash commands, autocomplete and button handlers, command
//! registration and audit logging.

/// Audit trail for completed commands
pub mod audit;
/// Discord command implementations
pub mod commands;
/// Framework setup, error hook and client start
pub mod framework;
/// Discord interaction handlers (autocomplete, pagination buttons)
pub mod handlers;
/// Command registration and the command-ID cache
pub mod registry;

use crate::{config::Settings, errors::Error};
use std::{collections::HashMap, sync::Arc};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Settings loaded from config.toml at startup
    pub settings: Arc<Settings>,
    /// Registered application command IDs by command name, used for clickable mentions
    pub command_ids: HashMap<String, u64>,
}

impl BotData {
    /// Creates the shared context from loaded settings and the IDs returned at registration.
    #[must_use]
    pub const fn new(settings: Arc<Settings>, command_ids: HashMap<String, u64>) -> Self {
        Self {
            settings,
            command_ids,
        }
    }
}

/// Poise context used by every command in this crate.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

pub use commands::*;
pub use framework::run_bot;
