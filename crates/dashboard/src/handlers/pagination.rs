//! Pagination helpers and types.

use serde::Serialize;

/// Customers shown per page.
pub const ITEMS_PER_PAGE: i64 = 6;

/// Pages shown in full before the control starts eliding with an ellipsis.
const MAX_UNELIDED_PAGES: i64 = 7;

/// Coerces a raw `page` query value to a 1-based page number.
///
/// Missing, non-numeric, zero and negative values all mean page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Number of pages needed for `total_count` rows.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 || page_size <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

/// Row offset of the first row on `page`.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(page_size)
}

/// One slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

/// Page numbers to display for `current_page` out of `total_pages`.
///
/// Up to seven pages are listed in full. Beyond that the first and last pages
/// stay visible and the gap around the current page is elided.
pub fn page_window(current_page: i64, total_pages: i64) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= MAX_UNELIDED_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}
