//! Button navigation for paginated help messages.
//!
//! A [`PaginatedReply`] sends the first page with Previous / position / Next buttons,
//! then listens for presses on those buttons until the inactivity timeout elapses.
//! Button IDs carry the invocation ID as prefix, so two help messages open at the
//! same time never react to each other's buttons.

use crate::{
    bot::Context,
    core::{
        about,
        pagination::{NavAction, NavState, PaginationController},
    },
    errors::Result,
};
use poise::{
    CreateReply, ReplyHandle,
    serenity_prelude::{
        ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton, CreateEmbed,
        CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage,
    },
};
use std::time::Duration;
use tracing::{debug, warn};

/// Title of every help page embed.
pub const HELP_TITLE: &str = "Help - Available Commands";

const PREVIOUS_SUFFIX: &str = ":prev";
const POSITION_SUFFIX: &str = ":page";
const NEXT_SUFFIX: &str = ":next";

/// Builds the custom ID of one navigation button.
fn button_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}{suffix}")
}

/// Maps a pressed button's custom ID back to the navigation it requests.
///
/// Returns `None` for IDs of other messages and for the position label.
fn parse_action(prefix: &str, custom_id: &str) -> Option<NavAction> {
    match custom_id.strip_prefix(prefix)? {
        PREVIOUS_SUFFIX => Some(NavAction::Previous),
        NEXT_SUFFIX => Some(NavAction::Next),
        _ => None,
    }
}

/// Enabled state of the Previous and Next buttons; an inactive view disables both.
const fn button_states(state: &NavState, active: bool) -> (bool, bool) {
    (active && state.prev_enabled, active && state.next_enabled)
}

/// Navigation buttons for the given state. Inactive views render every button disabled.
fn nav_components(prefix: &str, state: &NavState, active: bool) -> Vec<CreateActionRow> {
    let (prev_enabled, next_enabled) = button_states(state, active);
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(button_id(prefix, PREVIOUS_SUFFIX))
            .label("Previous")
            .style(ButtonStyle::Secondary)
            .disabled(!prev_enabled),
        CreateButton::new(button_id(prefix, POSITION_SUFFIX))
            .label(state.label.clone())
            .style(ButtonStyle::Secondary)
            .disabled(true),
        CreateButton::new(button_id(prefix, NEXT_SUFFIX))
            .label("Next")
            .style(ButtonStyle::Secondary)
            .disabled(!next_enabled),
    ])]
}

/// A sent help message together with the navigation state it displays.
pub struct PaginatedReply<'a> {
    ctx: Context<'a>,
    handle: ReplyHandle<'a>,
    controller: PaginationController,
    prefix: String,
    timeout: Duration,
}

impl<'a> PaginatedReply<'a> {
    /// Sends the first page with its navigation buttons.
    pub async fn send(ctx: Context<'a>, controller: PaginationController) -> Result<Self> {
        let prefix = ctx.id().to_string();
        let timeout = Duration::from_secs(ctx.data().settings.help.timeout_secs);

        let reply = CreateReply::default()
            .embed(render_page(ctx, controller.current_page()))
            .components(nav_components(&prefix, &controller.nav_state(), true));
        let handle = ctx.send(reply).await?;

        Ok(Self {
            ctx,
            handle,
            controller,
            prefix,
            timeout,
        })
    }

    /// Handles button presses until none arrives within the timeout, then disables the buttons.
    pub async fn navigate(mut self) -> Result<()> {
        while let Some(press) = ComponentInteractionCollector::new(self.ctx.serenity_context())
            .filter({
                let prefix = self.prefix.clone();
                move |press| parse_action(&prefix, &press.data.custom_id).is_some()
            })
            .timeout(self.timeout)
            .await
        {
            let Some(action) = parse_action(&self.prefix, &press.data.custom_id) else {
                continue;
            };

            self.controller.apply(action);
            let state = self.controller.nav_state();
            debug!(
                "Help page {} after {:?} from user {}",
                state.label, action, press.user.id
            );

            if let Err(e) = press
                .create_response(
                    self.ctx.serenity_context(),
                    CreateInteractionResponse::UpdateMessage(
                        CreateInteractionResponseMessage::new()
                            .embed(render_page(self.ctx, self.controller.current_page()))
                            .components(nav_components(&self.prefix, &state, true)),
                    ),
                )
                .await
            {
                // the collector keeps running, so the next press or the timeout still
                // settles the message
                warn!("Failed to update help page for {}: {}", self.prefix, e);
            }
        }

        debug!("Help navigation for {} timed out", self.prefix);
        self.handle
            .edit(
                self.ctx,
                CreateReply::default()
                    .embed(render_page(self.ctx, self.controller.current_page()))
                    .components(nav_components(
                        &self.prefix,
                        &self.controller.nav_state(),
                        false,
                    )),
            )
            .await?;

        Ok(())
    }
}

/// Wraps page content in the help embed.
fn render_page(ctx: Context<'_>, content: &str) -> CreateEmbed {
    let branding = &ctx.data().settings.branding;
    CreateEmbed::new()
        .title(HELP_TITLE)
        .colour(branding.embed_color())
        .description(content)
        .footer(CreateEmbedFooter::new(about::current_footer(&branding.footer)))
}
