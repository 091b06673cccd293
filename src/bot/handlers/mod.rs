//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete and
//! button clicks on paginated messages.

/// Autocomplete handlers for help categories
pub mod autocomplete;
/// Previous/next navigation for paginated help messages
pub mod pagination;
