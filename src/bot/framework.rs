use crate::{
    bot::{BotData, commands, registry},
    config::Settings,
    errors::Error,
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the poise framework, registers the commands and runs the client until it stops.
#[instrument(skip(token, settings))]
pub async fn run_bot(
    token: String,
    settings: Arc<Settings>,
    dev_guild: Option<u64>,
) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                let command_ids =
                    registry::register_commands(ctx, &framework.options().commands, dev_guild)
                        .await?;
                Ok(BotData::new(settings, command_ids))
            })
        })
        .build();

    // Slash commands and component interactions need no privileged intents
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                error!("Client error: {:?}", why);
                return Err(why);
            }
        }
        Err(e) => {
            error!("Error creating client: {:?}", e);
            return Err(e);
        }
    }
    Ok(())
}
