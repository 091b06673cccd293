//! Bot settings loading from config.toml
//!
//! Every section and field has a default, so a missing file or a partial file both
//! produce a usable configuration. Values are validated once after loading.

use crate::{
    core::pages::DEFAULT_MAX_PAGE_LENGTH,
    errors::{Error, Result},
};
use rand::Rng;
use serde::Deserialize;
use std::path::Path;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "CHATCOUNTER_CONFIG";

/// Config file read when no override is set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Paginated help listing
    pub help: HelpSettings,
    /// Embed colour and footer
    pub branding: Branding,
    /// Links shown by `/hello`
    pub links: Links,
    /// Where completed commands are reported
    pub audit: AuditSettings,
}

/// `[help]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HelpSettings {
    /// Maximum characters per help page
    pub max_page_length: usize,
    /// Seconds of inactivity before the navigation buttons stop responding
    pub timeout_secs: u64,
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self {
            max_page_length: DEFAULT_MAX_PAGE_LENGTH,
            timeout_secs: 120,
        }
    }
}

/// `[branding]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Fixed embed colour as `0xRRGGBB`; unset picks a random colour per embed
    pub color: Option<u32>,
    /// Footer text; `{year}` is replaced with the current year
    pub footer: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            color: None,
            footer: "Made with ❤️ by Augy Studios © {year} All Rights Sniffed • https://augystudios.com/"
                .to_string(),
        }
    }
}

/// `[links]` section, shown by `/hello`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Support server invite
    pub support: String,
    /// Documentation site
    pub docs: String,
    /// Status page
    pub status: String,
    /// One-time donation page
    pub donate: String,
    /// Monthly donation page
    pub monthly: String,
    /// Privacy policy
    pub privacy: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            support: "https://discord.gg/H4YYsgkYSa".to_string(),
            docs: "https://chatcounter.augystudios.com/".to_string(),
            status: "https://pages.statusbot.us/id/873989298507120690".to_string(),
            donate: "https://donate.stripe.com/28o2akeAr3hv0DK6oo".to_string(),
            monthly: "https://donate.stripe.com/6oEbKUdwn9FTgCI7st".to_string(),
            privacy: "https://augystudios.com/privacy".to_string(),
        }
    }
}

/// `[audit]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Channel that receives a short note for every completed command
    pub channel_id: Option<u64>,
}

/// Largest colour Discord accepts for an embed.
pub const MAX_EMBED_COLOR: u32 = 0x00FF_FFFF;

impl Branding {
    /// Colour for the next embed: the configured one, or a random colour.
    #[must_use]
    pub fn embed_color(&self) -> u32 {
        self.color
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_EMBED_COLOR))
    }
}

impl Settings {
    /// Checks values the rest of the bot relies on.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for a zero page length, a colour above `0xFFFFFF`, or a
    /// zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.help.max_page_length == 0 {
            return Err(Error::Config {
                message: "help.max_page_length must be greater than zero".to_string(),
            });
        }
        if self.branding.color.is_some_and(|c| c > MAX_EMBED_COLOR) {
            return Err(Error::Config {
                message: "branding.color must be at most 0xFFFFFF".to_string(),
            });
        }
        if self.help.timeout_secs == 0 {
            return Err(Error::Config {
                message: "help.timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses and validates settings from TOML text.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid, a field has the wrong type, or
/// validation fails.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or its contents are invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from `$CHATCOUNTER_CONFIG` or `./config.toml`.
///
/// A missing file is not an error: the defaults are used and a message is logged.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if !Path::new(&path).exists() {
        tracing::info!("No config file at {}, using default settings.", path);
        return Ok(Settings::default());
    }

    load_settings(&path)
}
