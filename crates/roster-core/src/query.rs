//! Search filtering and page-window math over the reconciled list.

use crate::User;

use serde::Serialize;

/// Pages shown on either side of the current page in [`page_links`]
const LINK_WINDOW: usize = 2;

/// One page window over a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_items: Vec<T>,
    /// Length of the list before paging
    pub total: usize,
}

/// Entry in a page navigation strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// "Showing `first` to `last` of `total`" for a resolved page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page: usize,
    pub page_size: usize,
    pub pages: usize,
    /// 1-based position of the first item on the page (0 when empty)
    pub first: usize,
    /// 1-based position of the last item on the page (0 when empty)
    pub last: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let pages = page_count(total, page_size);
        let start = page.saturating_sub(1).saturating_mul(page_size);

        let (first, last) = if page == 0 || page_size == 0 || start >= total {
            (0, 0)
        } else {
            (start + 1, start.saturating_add(page_size).min(total))
        };

        Self {
            page,
            page_size,
            pages,
            first,
            last,
            total,
        }
    }
}

/// Keep the users whose name, username, email, phone or company name
/// contains `query`, ignoring case. An empty query keeps everything.
///
/// Missing fields never match.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    if query.is_empty() {
        return users.to_vec();
    }

    let needle = query.to_lowercase();
    let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&needle));

    users
        .iter()
        .filter(|u| {
            hit(u.name.as_deref())
                || hit(u.username.as_deref())
                || hit(u.email.as_deref())
                || hit(u.phone.as_deref())
                || hit(u.company_name())
        })
        .cloned()
        .collect()
}

/// Slice out the 1-indexed `page` of `page_size` items.
///
/// No clamping: a page past the end (or page 0, or a zero page size) yields
/// no items. `total` is always the full input length.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();

    let page_items = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < total)
        .map(|start| {
            let end = start.saturating_add(page_size).min(total);
            items[start..end].to_vec()
        })
        .unwrap_or_default();

    Page { page_items, total }
}

/// Number of pages needed for `total` items; never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Redirect an out-of-range page request to the nearest valid page
pub fn resolve_page(requested: usize, pages: usize) -> usize {
    requested.clamp(1, pages.max(1))
}

/// Navigation strip: first and last page always, a window around the
/// current page, and gaps where pages are skipped.
pub fn page_links(page: usize, pages: usize) -> Vec<PageLink> {
    let mut links = vec![PageLink::Page(1)];

    if page > LINK_WINDOW + 2 {
        links.push(PageLink::Gap);
    }

    let low = page.saturating_sub(LINK_WINDOW).max(2);
    let high = page.saturating_add(LINK_WINDOW).min(pages.saturating_sub(1));
    links.extend((low..=high).map(PageLink::Page));

    if page + LINK_WINDOW + 1 < pages {
        links.push(PageLink::Gap);
        links.push(PageLink::Page(pages));
    } else if pages > 1 {
        links.push(PageLink::Page(pages));
    }

    links
}
