//! Environment settings - the bot token and the optional development guild.
//!
//! These values come from the process environment, typically populated from the
//! `.env` file by `dotenvy` at startup. The token is read directly before use and is
//! never stored in [`Settings`](super::settings::Settings).

use crate::errors::{Error, Result};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Environment variable selecting a guild for fast command registration during development.
pub const DEV_GUILD_VAR: &str = "DEV_GUILD_ID";

/// Reads the bot token from the environment.
///
/// # Errors
/// Returns [`Error::EnvVar`] when the variable is unset and [`Error::Config`] when it is blank.
pub fn discord_token() -> Result<String> {
    let token = std::env::var(TOKEN_VAR)?;
    if token.trim().is_empty() {
        return Err(Error::Config {
            message: format!("{TOKEN_VAR} is empty"),
        });
    }
    Ok(token)
}

/// Reads the development guild ID, if configured.
///
/// Unset means commands are registered globally. An unparsable value is logged and
/// ignored rather than stopping the bot.
#[must_use]
pub fn dev_guild_id() -> Option<u64> {
    let raw = std::env::var(DEV_GUILD_VAR).ok()?;
    parse_guild_id(&raw).or_else(|| {
        tracing::warn!("Ignoring {} with invalid value {:?}", DEV_GUILD_VAR, raw);
        None
    })
}

/// Parses a guild ID; Discord snowflakes are never zero.
fn parse_guild_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|&id| id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guild_id_valid() {
        assert_eq!(
            parse_guild_id(" 873989298507120690 "),
            Some(873_989_298_507_120_690)
        );
    }

    #[test]
    fn test_parse_guild_id_rejects_garbage_and_zero() {
        assert_eq!(parse_guild_id("not-a-number"), None);
        assert_eq!(parse_guild_id("0"), None);
        assert_eq!(parse_guild_id(""), None);
    }
}
