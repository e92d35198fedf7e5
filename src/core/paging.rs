/// One slot in the rendered pagination strip. Gaps become the non
/// clickable ellipsis entries between the outer and the inner pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// The numbered window around the current page. Short lists are printed
/// whole, longer ones collapse to first page, up to three pages around the
/// current one and the last page, with gaps where pages were skipped.
pub fn pagination_window(page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= 5 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if page > 3 {
        items.push(PageItem::Gap);
    }

    //clamped so the run never repeats the first or the last page
    let start = page.saturating_sub(1).max(2);
    let end = page.saturating_add(1).min(total_pages - 1);
    for inner in start..=end {
        items.push(PageItem::Page(inner));
    }

    if page < total_pages - 2 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total_pages));
    items
}
