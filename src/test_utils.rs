//! Shared test utilities for `ChatCounter`.
//!
//! Small builders for category groups, command entries and paginated views with
//! sensible defaults.

use crate::core::{
    catalog::{CategoryGroup, CommandEntry},
    pagination::PaginationController,
};

/// Builds a category group from a name and its pre-rendered lines.
pub fn group(name: &str, lines: &[&str]) -> CategoryGroup {
    CategoryGroup {
        name: name.to_string(),
        lines: lines.iter().map(|line| (*line).to_string()).collect(),
    }
}

/// Builds a command entry with no known command ID.
///
/// # Defaults
/// * `id`: None (mentions render as `/name`)
pub fn entry(name: &str, description: &str, category: &str) -> CommandEntry {
    CommandEntry {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        id: None,
    }
}

/// Builds a command entry carrying a registered command ID.
pub fn entry_with_id(name: &str, description: &str, category: &str, id: u64) -> CommandEntry {
    CommandEntry {
        id: Some(id),
        ..entry(name, description, category)
    }
}

/// A controller over three pages named "page one" to "page three".
#[allow(clippy::unwrap_used)]
pub fn three_page_controller() -> PaginationController {
    PaginationController::new(vec![
        "page one".to_string(),
        "page two".to_string(),
        "page three".to_string(),
    ])
    .unwrap()
}
