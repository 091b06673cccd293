/// Bot settings loading from config.toml
pub mod settings;

/// Token and development guild from environment variables
pub mod env;

pub use settings::{Settings, load_default_settings};
