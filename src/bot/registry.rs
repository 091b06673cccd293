//! Command registration and the catalog of registered commands.
//!
//! After registering, the IDs Discord assigned are fetched back so the help listing
//! can render `</name:id>` mentions that users can click.

use crate::{
    bot::{BotData, Context},
    core::catalog::{CommandEntry, DEFAULT_CATEGORY},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tracing::info;

/// Description used for commands registered without one.
const NO_DESCRIPTION: &str = "No description provided.";

/// Registers all commands and returns the assigned command IDs by name.
///
/// With a development guild, commands are registered in that guild only, which
/// updates instantly; otherwise they are registered globally.
pub async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<BotData, Error>],
    dev_guild: Option<u64>,
) -> Result<HashMap<String, u64>> {
    let registered = match dev_guild {
        Some(guild) => {
            let guild_id = serenity::GuildId::new(guild);
            info!("Registering commands in guild {}...", guild_id);
            poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
            ctx.http.get_guild_commands(guild_id).await?
        }
        None => {
            info!("Registering commands globally...");
            poise::builtins::register_globally(ctx, commands).await?;
            ctx.http.get_global_commands().await?
        }
    };

    info!("Registered {} application commands", registered.len());

    Ok(registered
        .into_iter()
        .map(|command| (command.name, command.id.get()))
        .collect())
}

/// Describable slash commands in registration order, with IDs from the cache.
///
/// Prefix-only and context-menu commands and commands hidden from help are skipped.
#[must_use]
pub fn command_entries(
    commands: &[poise::Command<BotData, Error>],
    command_ids: &HashMap<String, u64>,
) -> Vec<CommandEntry> {
    commands
        .iter()
        .filter(|command| command.slash_action.is_some() && !command.hide_in_help)
        .map(|command| CommandEntry {
            name: command.name.clone(),
            description: command
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            category: command
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            id: command_ids.get(&command.name).copied(),
        })
        .collect()
}

/// Catalog entries for the commands of the running framework.
#[must_use]
pub fn current_entries(ctx: Context<'_>) -> Vec<CommandEntry> {
    command_entries(&ctx.framework().options().commands, &ctx.data().command_ids)
}
