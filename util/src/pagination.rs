//! Fixed-size page slicing over ordered result lists.
//!
//! Pages are 1-based. A page past the end of the list is an empty slice, never
//! an error; callers decide whether an empty page means "not found".

/// Page size used by every paginated resource.
pub const PAGE_SIZE: u64 = 10;

/// Half-open `[start, end)` index range covered by `page`.
///
/// Page `0` is treated as page `1`.
pub fn page_bounds(page: u64, size: u64) -> (usize, usize) {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size);
    (
        usize::try_from(start).unwrap_or(usize::MAX),
        usize::try_from(end).unwrap_or(usize::MAX),
    )
}

/// Returns the items of `page` from an already ordered slice.
pub fn paginate<T>(items: &[T], page: u64, size: u64) -> &[T] {
    let (start, end) = page_bounds(page, size);
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}
