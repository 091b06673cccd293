//! Page navigation state for paginated messages.
//!
//! The controller owns the rendered pages of one help request together with the index
//! of the page currently shown. It knows nothing about buttons or messages; the bot
//! layer reads [`NavState`] to render the controls and calls back in when one is pressed.

use crate::errors::{Error, Result};

/// A navigation request coming from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move one page back.
    Previous,
    /// Move one page forward.
    Next,
}

/// Derived state of the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Whether the "previous" control can be used
    pub prev_enabled: bool,
    /// Whether the "next" control can be used
    pub next_enabled: bool,
    /// One-based position label, e.g. `2/5`
    pub label: String,
}

/// Owns a non-empty, immutable sequence of pages and the index of the current one.
#[derive(Debug, Clone)]
pub struct PaginationController {
    pages: Vec<String>,
    current: usize,
}

impl PaginationController {
    /// Creates a controller positioned on the first page.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when `pages` is empty.
    pub fn new(pages: Vec<String>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::Config {
                message: "a paginated view needs at least one page".to_string(),
            });
        }

        Ok(Self { pages, current: 0 })
    }

    /// Steps back one page, staying on the first page if already there.
    pub fn go_previous(&mut self) -> &str {
        self.current = self.current.saturating_sub(1);
        self.current_page()
    }

    /// Steps forward one page, staying on the last page if already there.
    pub fn go_next(&mut self) -> &str {
        self.current = (self.current + 1).min(self.last_index());
        self.current_page()
    }

    /// Applies a navigation action and returns the page now current.
    pub fn apply(&mut self, action: NavAction) -> &str {
        match action {
            NavAction::Previous => self.go_previous(),
            NavAction::Next => self.go_next(),
        }
    }

    /// Content of the page currently shown.
    #[must_use]
    pub fn current_page(&self) -> &str {
        &self.pages[self.current]
    }

    /// Zero-based index of the page currently shown.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of pages; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`, construction rejects empty page sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Enabled state of the controls and the position label for the current page.
    #[must_use]
    pub fn nav_state(&self) -> NavState {
        NavState {
            prev_enabled: self.current > 0,
            next_enabled: self.current < self.last_index(),
            label: format!("{}/{}", self.current + 1, self.pages.len()),
        }
    }

    fn last_index(&self) -> usize {
        self.pages.len() - 1
    }
}
