//! Command catalog - groups describable commands by category for the help listing.
//!
//! The bot layer turns the framework's registered commands into [`CommandEntry`]
//! values; everything here is plain data so it can be tested without a Discord client.

use crate::errors::{Error, Result};

/// Category used for commands registered without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Discord caps autocomplete responses at 25 choices.
pub const AUTOCOMPLETE_LIMIT: usize = 25;

/// A describable slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Command name without the leading slash
    pub name: String,
    /// One-line description shown next to the command
    pub description: String,
    /// Category the command is listed under
    pub category: String,
    /// Application command ID, once known from the registration response
    pub id: Option<u64>,
}

impl CommandEntry {
    /// Renders the command as a clickable mention when its ID is known, `/name` otherwise.
    #[must_use]
    pub fn mention(&self) -> String {
        match self.id {
            Some(id) => format!("</{}:{id}>", self.name),
            None => format!("/{}", self.name),
        }
    }

    /// Renders the help line for this command.
    #[must_use]
    pub fn help_line(&self) -> String {
        format!("**{}** - {}\n", self.mention(), self.description)
    }
}

/// Named bundle of rendered help lines, one per command in the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Category name, rendered in the page header
    pub name: String,
    /// Rendered help lines in listing order
    pub lines: Vec<String>,
}

/// Groups entries by category.
///
/// Categories keep the order in which they are first seen, and commands keep their
/// order within a category. Categories without commands never appear.
#[must_use]
pub fn group_entries(entries: &[CommandEntry]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for entry in entries {
        let line = entry.help_line();
        match groups.iter_mut().find(|g| g.name == entry.category) {
            Some(group) => group.lines.push(line),
            None => groups.push(CategoryGroup {
                name: entry.category.clone(),
                lines: vec![line],
            }),
        }
    }

    groups
}

/// Narrows the groups to the requested category, or keeps them all when none is given.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] when `category` names no available group.
pub fn select_category(
    groups: Vec<CategoryGroup>,
    category: Option<&str>,
) -> Result<Vec<CategoryGroup>> {
    let Some(wanted) = category else {
        return Ok(groups);
    };

    groups
        .into_iter()
        .find(|g| g.name == wanted)
        .map(|g| vec![g])
        .ok_or_else(|| Error::CategoryNotFound {
            name: wanted.to_string(),
        })
}

/// Category names containing `partial`, case-insensitively, up to the autocomplete limit.
#[must_use]
pub fn matching_categories(groups: &[CategoryGroup], partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    groups
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&partial_lower))
        .map(|g| g.name.clone())
        .take(AUTOCOMPLETE_LIMIT)
        .collect()
}
