//! Page building for grouped help content.
//!
//! Splits ordered category groups into pages whose character count stays within a
//! budget. Every page that continues a category starts with that category's header
//! again, so each page can be read on its own.

use crate::{
    core::catalog::CategoryGroup,
    errors::{Error, Result},
};

/// Default page budget, matching the embed field limit the pages are rendered into.
pub const DEFAULT_MAX_PAGE_LENGTH: usize = 1024;

/// Renders the header that opens a category on a page.
#[must_use]
pub fn group_header(name: &str) -> String {
    format!("**{name} Commands**\n")
}

/// Accumulates content for the page currently under construction.
struct PageAccumulator {
    max_length: usize,
    content: String,
    // Tracked separately; `String::len` counts bytes, the budget counts characters.
    length: usize,
    pages: Vec<String>,
}

impl PageAccumulator {
    const fn new(max_length: usize) -> Self {
        Self {
            max_length,
            content: String::new(),
            length: 0,
            pages: Vec::new(),
        }
    }

    const fn is_empty(&self) -> bool {
        self.length == 0
    }

    const fn overflows(&self, extra: usize) -> bool {
        self.length + extra > self.max_length
    }

    fn push(&mut self, text: &str, text_length: usize) {
        self.content.push_str(text);
        self.length += text_length;
    }

    fn flush(&mut self) {
        if !self.is_empty() {
            self.pages.push(std::mem::take(&mut self.content));
            self.length = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.pages
    }
}

/// Splits grouped lines into pages of at most `max_length` characters.
///
/// Groups and their lines keep their order. A group's header is written once when the
/// group starts and again at the top of every page the group spills onto, as long as
/// header and line fit together. A single header or line longer than the budget cannot
/// be split and becomes a page of its own.
///
/// Returns an empty vector when the groups produce no content; see [`build_pages_or`].
///
/// # Errors
/// Returns [`Error::Config`] when `max_length` is zero.
pub fn build_pages(groups: &[CategoryGroup], max_length: usize) -> Result<Vec<String>> {
    if max_length == 0 {
        return Err(Error::Config {
            message: "page length budget must be greater than zero".to_string(),
        });
    }

    let mut page = PageAccumulator::new(max_length);

    for group in groups {
        let header = group_header(&group.name);
        let header_length = header.chars().count();

        // Only the header has to fit here, so it can close a page whose next line
        // then opens the following page under a repeated header.
        if !page.is_empty() && page.overflows(header_length) {
            page.flush();
        }
        page.push(&header, header_length);

        for line in &group.lines {
            let line_length = line.chars().count();

            if !page.is_empty() && page.overflows(line_length) {
                page.flush();
                // Without room for both, the line opens a header-less page that
                // later lines of the same group may join.
                if header_length + line_length <= max_length {
                    page.push(&header, header_length);
                }
            }
            page.push(line, line_length);
        }
    }

    Ok(page.finish())
}

/// Same as [`build_pages`], but never returns an empty sequence: when no content is
/// produced a single `placeholder` page is returned instead.
///
/// # Errors
/// Returns [`Error::Config`] when `max_length` is zero.
pub fn build_pages_or(
    groups: &[CategoryGroup],
    max_length: usize,
    placeholder: &str,
) -> Result<Vec<String>> {
    let mut pages = build_pages(groups, max_length)?;
    if pages.is_empty() {
        pages.push(placeholder.to_string());
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    /// Strips every header occurrence and splits the remainder back into lines.
    fn lines_without_headers(pages: &[String], groups: &[CategoryGroup]) -> Vec<String> {
        let headers: Vec<String> = groups.iter().map(|g| group_header(&g.name)).collect();
        pages
            .iter()
            .flat_map(|page| page.split_inclusive('\n'))
            .filter(|line| !headers.iter().any(|h| h.as_str() == *line))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_two_small_groups_fit_on_one_page() {
        let groups = vec![
            group("Fun", &["/joke - tell a joke\n"]),
            group("Admin", &["/ban - ban a user\n"]),
        ];

        let pages = build_pages(&groups, DEFAULT_MAX_PAGE_LENGTH).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0],
            "**Fun Commands**\n/joke - tell a joke\n**Admin Commands**\n/ban - ban a user\n"
        );
    }

    #[test]
    fn test_zero_budget_is_a_configuration_error() {
        let groups = vec![group("Fun", &["/joke - tell a joke\n"])];
        let result = build_pages(&groups, 0);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_empty_input_yields_no_pages() {
        assert!(build_pages(&[], 100).unwrap().is_empty());
    }

    #[test]
    fn test_placeholder_used_for_empty_input() {
        let pages = build_pages_or(&[], 100, "No commands available.").unwrap();
        assert_eq!(pages, vec!["No commands available.".to_string()]);
    }

    #[test]
    fn test_placeholder_not_used_when_content_exists() {
        let groups = vec![group("Fun", &["/joke - tell a joke\n"])];
        let pages = build_pages_or(&groups, 100, "No commands available.").unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].starts_with("**Fun Commands**\n"));
    }

    #[test]
    fn test_header_repeated_on_continuation_page() {
        // header is 17 chars, each line 10 chars
        let groups = vec![group("Fun", &["aaaaaaaaa\n", "bbbbbbbbb\n", "ccccccccc\n"])];

        let pages = build_pages(&groups, 40).unwrap();

        assert_eq!(
            pages,
            vec![
                "**Fun Commands**\naaaaaaaaa\nbbbbbbbbb\n".to_string(),
                "**Fun Commands**\nccccccccc\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_group_header_starts_new_page_when_it_does_not_fit() {
        let groups = vec![
            group("Fun", &["aaaaaaaaa\n", "bbbbbbbbb\n"]),
            group("Admin", &["ccccccccc\n"]),
        ];

        let pages = build_pages(&groups, 40).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "**Admin Commands**\nccccccccc\n");
    }

    #[test]
    fn test_oversized_line_becomes_its_own_page() {
        let long_line = format!("{}\n", "x".repeat(60));
        let groups = vec![group("Fun", &["short\n", long_line.as_str(), "after\n"])];

        let pages = build_pages(&groups, 40).unwrap();

        assert_eq!(pages[0], "**Fun Commands**\nshort\n");
        assert_eq!(pages[1], long_line);
        assert_eq!(pages[2], "**Fun Commands**\nafter\n");
    }

    #[test]
    fn test_line_without_room_for_header_continues_headerless() {
        // header 17 + line 25 exceeds 40, the line alone does not
        let first = format!("{}\n", "a".repeat(24));
        let groups = vec![group("Fun", &[first.as_str(), "bbbbbbbbb\n"])];

        let pages = build_pages(&groups, 40).unwrap();

        assert_eq!(
            pages,
            vec![
                "**Fun Commands**\n".to_string(),
                format!("{first}bbbbbbbbb\n"),
            ]
        );
    }

    #[test]
    fn test_header_can_close_a_page_before_its_first_line() {
        // 17 + 3 + 15 = 35 fits; the first B line does not
        let groups = vec![group("Fun", &["ab\n"]), group("B", &["ccccccccc\n"])];

        let pages = build_pages(&groups, 40).unwrap();

        assert_eq!(
            pages,
            vec![
                "**Fun Commands**\nab\n**B Commands**\n".to_string(),
                "**B Commands**\nccccccccc\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_pages_respect_budget_or_are_single_atomic_units() {
        let long_line = format!("{}\n", "y".repeat(50));
        let groups = vec![
            group("Fun", &["/joke - tell a joke\n", "/meme - post a meme\n"]),
            group("A-very-long-category-name", &["/x - x\n", long_line.as_str()]),
            group("Admin", &["/ban - ban a user\n", "/kick - kick a user\n"]),
        ];

        for max_length in [1, 5, 20, 30, 45, 64, 200] {
            let pages = build_pages(&groups, max_length).unwrap();
            for page in &pages {
                let length = page.chars().count();
                let atomic = page.split_inclusive('\n').count() == 1;
                assert!(
                    length <= max_length || atomic,
                    "page {page:?} exceeds {max_length}"
                );
            }
        }
    }

    #[test]
    fn test_every_line_appears_once_in_order() {
        let groups = vec![
            group("Fun", &["/joke - tell a joke\n", "/meme - post a meme\n"]),
            group("Stats", &["/count - show counts\n", "/top - leaderboard\n"]),
            group("Admin", &["/ban - ban a user\n"]),
        ];
        let expected: Vec<String> = groups.iter().flat_map(|g| g.lines.clone()).collect();

        for max_length in [10, 30, 50, 1024] {
            let pages = build_pages(&groups, max_length).unwrap();
            assert_eq!(lines_without_headers(&pages, &groups), expected);
        }
    }

    #[test]
    fn test_groups_sharing_a_name_each_get_their_header() {
        let groups = vec![group("Fun", &["/a - a\n"]), group("Fun", &["/b - b\n"])];

        let pages = build_pages(&groups, DEFAULT_MAX_PAGE_LENGTH).unwrap();

        assert_eq!(
            pages[0],
            "**Fun Commands**\n/a - a\n**Fun Commands**\n/b - b\n"
        );
    }

    #[test]
    fn test_budget_counts_characters_not_bytes() {
        // 'é' is two bytes; 17 + 10 characters fits in 27
        let groups = vec![group("Fun", &["éééééééé?\n"])];
        let pages = build_pages(&groups, 27).unwrap();
        assert_eq!(pages.len(), 1);
    }
}
