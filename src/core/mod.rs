//! Core logic - framework-agnostic help pagination, command catalog and response content.
//!
//! Nothing in here talks to Discord. The bot layer converts framework data into these
//! types and renders the results.

/// `/ping` and `/hello` response content
pub mod about;
/// Command entries grouped by category
pub mod catalog;
/// Splitting grouped help lines into bounded pages
pub mod pages;
/// Current-page state and navigation
pub mod pagination;
