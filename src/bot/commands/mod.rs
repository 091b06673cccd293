//! Discord command implementations organized by category.

/// General commands - ping, hello and help
pub mod general;

pub use general::*;

use crate::{bot::BotData, errors::Error};

/// Every command the framework registers, in help-listing order.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![general::ping(), general::hello(), general::help()]
}
