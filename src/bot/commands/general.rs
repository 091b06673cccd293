//! General Discord commands - ping, hello and help.
//!
//! These commands need no stored state beyond the loaded settings and the
//! command-ID cache.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context, audit,
            handlers::{autocomplete, pagination::PaginatedReply},
            registry,
        },
        core::{about, catalog, pages, pagination::PaginationController},
        errors::{Error, Result},
    };
    use poise::{
        CreateReply,
        serenity_prelude::{CreateEmbed, CreateEmbedFooter},
    };

    /// Shown instead of an empty help listing.
    const NO_COMMANDS_PLACEHOLDER: &str = "No commands are available right now.";

    /// Check the bot's latency.
    ///
    /// Replies with the latency of the most recent gateway heartbeat in milliseconds.
    #[poise::command(slash_command, category = "General")]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        let latency = ctx.ping().await;
        ctx.say(about::latency_message(latency)).await?;
        audit::log_action(ctx);
        Ok(())
    }

    /// Learn more about the bot.
    ///
    /// Shows links for inviting the bot, getting support, reading the documentation,
    /// checking the bot's status and supporting its development.
    #[poise::command(slash_command, category = "General")]
    pub async fn hello(ctx: Context<'_>) -> Result<()> {
        let settings = &ctx.data().settings;
        let bot_id = ctx.framework().bot_id.get();

        let embed = CreateEmbed::new()
            .title("Hello!")
            .colour(settings.branding.embed_color())
            .fields(about::hello_fields(&settings.links, bot_id))
            .footer(CreateEmbedFooter::new(about::current_footer(
                &settings.branding.footer,
            )));

        ctx.send(CreateReply::default().embed(embed)).await?;
        audit::log_action(ctx);
        Ok(())
    }

    /// Display a list of available commands categorized by their category.
    ///
    /// The listing is split into pages that can be browsed with the buttons below it.
    /// Pass a category to list only the commands in that category.
    #[poise::command(slash_command, category = "General")]
    pub async fn help(
        ctx: Context<'_>,
        #[description = "Choose a category to see its commands"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
    ) -> Result<()> {
        let settings = &ctx.data().settings;

        let entries = registry::current_entries(ctx);
        let groups = catalog::group_entries(&entries);

        let groups = match catalog::select_category(groups, category.as_deref()) {
            Ok(groups) => groups,
            Err(Error::CategoryNotFound { name }) => {
                tracing::debug!("Help requested for unknown category {:?}", name);
                ctx.send(
                    CreateReply::default()
                        .content(format!("❌ No commands found for category: {name}"))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let page_contents = pages::build_pages_or(
            &groups,
            settings.help.max_page_length,
            NO_COMMANDS_PLACEHOLDER,
        )?;
        let controller = PaginationController::new(page_contents)?;

        let reply = PaginatedReply::send(ctx, controller).await?;
        audit::log_action(ctx);
        reply.navigate().await
    }
}

// Re-export all commands
pub use inner::*;
