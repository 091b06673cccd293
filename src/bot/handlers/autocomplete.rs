//! Autocomplete handlers for Discord slash command parameters.

use crate::{
    bot::{Context, registry},
    core::catalog,
};

/// Provides autocomplete suggestions for help categories.
///
/// Suggests every category that has at least one listed command and whose name
/// contains the partial input, ignoring case. At most 25 names are returned.
pub async fn autocomplete_category(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let entries = registry::current_entries(ctx);
    let groups = catalog::group_entries(&entries);
    catalog::matching_categories(&groups, partial)
}
