use dioxus::prelude::*;

/// Pages shown around the current page
pub const PAGE_RANGE_DISPLAYED: u32 = 5;
/// Pages always shown at each end
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Break,
}

/// Page links for `total` pages around `current` (both 1-based).
///
/// Shows `margin` pages at each end and a window of `range` pages around the
/// current one; gaps collapse into a single break, except that a gap of one
/// page shows the page itself.
pub fn page_items(total: u32, current: u32, range: u32, margin: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let range = range.max(1);

    let mut window_start = current.saturating_sub(range / 2).max(1);
    let window_end = (window_start + range - 1).min(total);
    window_start = window_end.saturating_sub(range - 1).max(1);

    let visible = |page: u32| {
        page <= margin
            || page > total.saturating_sub(margin)
            || (window_start..=window_end).contains(&page)
    };

    let mut items = Vec::new();
    for page in 1..=total {
        let single_gap = page > 1 && page < total && visible(page - 1) && visible(page + 1);
        if visible(page) || single_gap {
            items.push(PageItem::Page(page));
        } else if items.last() != Some(&PageItem::Break) {
            items.push(PageItem::Break);
        }
    }
    items
}

/// Page selector. Not rendered at all for a single page.
#[component]
pub fn Pagination(total_pages: u32, current_page: u32, on_page_change: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let items = page_items(
        total_pages,
        current_page,
        PAGE_RANGE_DISPLAYED,
        MARGIN_PAGES_DISPLAYED,
    );
    let is_first = current_page <= 1;
    let is_last = current_page >= total_pages;

    rsx! {
        nav { class: "pagination", aria_label: "Pagination",
            ul {
                li { class: if is_first { "previous disabled" } else { "previous" },
                    button {
                        aria_label: "Previous page",
                        disabled: is_first,
                        onclick: move |_| on_page_change.call(current_page.saturating_sub(1).max(1)),
                        "←"
                    }
                }
                for (index, item) in items.into_iter().enumerate() {
                    match item {
                        PageItem::Page(page) => rsx! {
                            li {
                                key: "page-{page}",
                                class: if page == current_page { "active" } else { "" },
                                button {
                                    aria_current: if page == current_page { "page" } else { "false" },
                                    onclick: move |_| on_page_change.call(page),
                                    "{page}"
                                }
                            }
                        },
                        PageItem::Break => rsx! {
                            li { key: "break-{index}", class: "break", "…" }
                        },
                    }
                }
                li { class: if is_last { "next disabled" } else { "next" },
                    button {
                        aria_label: "Next page",
                        disabled: is_last,
                        onclick: move |_| on_page_change.call((current_page + 1).min(total_pages)),
                        "→"
                    }
                }
            }
        }
    }
}
