//! Content of the `/ping` and `/hello` responses.
//!
//! Framework-agnostic: returns strings and field tuples that the bot layer places
//! into replies and embeds.

use crate::config::settings::Links;
use std::time::Duration;

/// Shown before the first heartbeat has been acknowledged.
pub const LATENCY_UNKNOWN: &str = "Pong! 🏓 Latency not measured yet, try again in a moment.";

/// Renders the `/ping` reply, rounding the heartbeat latency to whole milliseconds.
#[must_use]
pub fn latency_message(latency: Duration) -> String {
    if latency.is_zero() {
        return LATENCY_UNKNOWN.to_string();
    }

    let millis = (latency.as_micros() + 500) / 1000;
    format!("Pong! 🏓 Latency: {millis}ms")
}

/// OAuth2 link that adds the bot to a server.
#[must_use]
pub fn invite_link(bot_id: u64) -> String {
    format!("https://discord.com/oauth2/authorize?client_id={bot_id}")
}

/// Embed fields of the `/hello` response as `(name, value, inline)`.
#[must_use]
pub fn hello_fields(links: &Links, bot_id: u64) -> Vec<(String, String, bool)> {
    let field = |name: &str, label: &str, url: &str, inline: bool| {
        (name.to_string(), format!("[{label}]({url})"), inline)
    };

    vec![
        field("Add Me to Your Server", "Click here!", &invite_link(bot_id), true),
        field("Bot Support", "Got questions? Join here!", &links.support, true),
        field("How to Use", "View the documentation!", &links.docs, true),
        field("Bot Status", "Check the bot's status here!", &links.status, true),
        field("Support the Bot", "Buy me a coffee!", &links.donate, true),
        field("Monthly Support", "Support us monthly!", &links.monthly, true),
        field("Privacy Policy", "Click Here", &links.privacy, false),
    ]
}

/// Substitutes `{year}` in the configured footer.
#[must_use]
pub fn footer_text(template: &str, year: i32) -> String {
    template.replace("{year}", &year.to_string())
}

/// Footer text for the current local year.
#[must_use]
pub fn current_footer(template: &str) -> String {
    use chrono::Datelike;
    footer_text(template, chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_rounds_to_nearest_millisecond() {
        assert_eq!(
            latency_message(Duration::from_micros(41_499)),
            "Pong! 🏓 Latency: 41ms"
        );
        assert_eq!(
            latency_message(Duration::from_micros(41_500)),
            "Pong! 🏓 Latency: 42ms"
        );
    }

    #[test]
    fn test_zero_latency_means_not_measured() {
        assert_eq!(latency_message(Duration::ZERO), LATENCY_UNKNOWN);
    }

    #[test]
    fn test_invite_link() {
        assert_eq!(
            invite_link(873_989_298_507_120_690),
            "https://discord.com/oauth2/authorize?client_id=873989298507120690"
        );
    }

    #[test]
    fn test_hello_fields() {
        let links = Links::default();
        let fields = hello_fields(&links, 42);

        assert_eq!(fields.len(), 7);
        assert_eq!(
            fields[0],
            (
                "Add Me to Your Server".to_string(),
                "[Click here!](https://discord.com/oauth2/authorize?client_id=42)".to_string(),
                true,
            )
        );
        assert_eq!(
            fields[2].1,
            "[View the documentation!](https://chatcounter.augystudios.com/)"
        );

        // only the privacy policy sits on its own row
        let inline: Vec<bool> = fields.iter().map(|f| f.2).collect();
        assert_eq!(inline, vec![true, true, true, true, true, true, false]);
    }

    #[test]
    fn test_footer_year_substitution() {
        assert_eq!(footer_text("© {year} Augy Studios", 2025), "© 2025 Augy Studios");
        assert_eq!(footer_text("no placeholder", 2025), "no placeholder");
    }
}
