//! Audit trail for completed commands.
//!
//! Every completed command is recorded as a structured tracing event. When an audit
//! channel is configured a short note is also posted there from a spawned task, so
//! the command's response never waits on it.

use crate::bot::Context;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{info, warn};

/// Records a completed command invocation.
pub fn log_action(ctx: Context<'_>) {
    let command = ctx.command().qualified_name.clone();
    let user = ctx.author();
    let guild_id = ctx.guild_id().map(serenity::GuildId::get);
    let channel_id = ctx.channel_id().get();

    info!(
        command = %command,
        user_id = %user.id,
        user = %user.name,
        guild_id = ?guild_id,
        channel_id,
        "Command completed"
    );

    let Some(audit_channel) = ctx.data().settings.audit.channel_id else {
        return;
    };

    let message = audit_message(&command, user.id.get(), guild_id, channel_id);
    let http = Arc::clone(&ctx.serenity_context().http);

    tokio::spawn(async move {
        if let Err(e) = serenity::ChannelId::new(audit_channel)
            .say(&*http, message)
            .await
        {
            warn!("Failed to post audit message to {}: {}", audit_channel, e);
        }
    });
}

/// Renders the note posted to the audit channel.
fn audit_message(command: &str, user_id: u64, guild_id: Option<u64>, channel_id: u64) -> String {
    let place = match guild_id {
        Some(guild_id) => format!("<#{channel_id}> (guild `{guild_id}`)"),
        None => "a direct message".to_string(),
    };
    format!("📝 `/{command}` used by <@{user_id}> in {place}")
}
