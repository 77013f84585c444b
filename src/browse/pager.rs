//! Fixed-size result windows and remaining-count arithmetic.
//!
//! This module slices an ordered result set into successive pages. All
//! arithmetic saturates: advancing past the end of the results is legal and
//! yields an empty window with an unchanged cursor, never a panic or an
//! error. The caller is expected to have disabled the advance control when
//! [`remaining`] hits zero, but the pager does not rely on that.
//!
//! The cursor counts pages already rendered for the current result set and
//! is therefore always at least 1 once a first page exists.

/// Returns the first page window and the initial cursor (always 1).
///
/// The window is `results[0 .. page_size]` clamped to the sequence bounds.
///
/// # Examples
///
/// ```
/// use tomeshelf::browse::pager;
///
/// let results: Vec<u32> = (0..100).collect();
/// let (window, cursor) = pager::first_page(&results, 36);
/// assert_eq!(window.len(), 36);
/// assert_eq!(cursor, 1);
/// ```
#[must_use]
pub fn first_page<T>(results: &[T], page_size: usize) -> (&[T], usize) {
    let end = page_size.min(results.len());
    (&results[..end], 1)
}

/// Returns the next page window and the advanced cursor.
///
/// The window is `results[cursor·page_size .. (cursor+1)·page_size]` clamped
/// to the sequence bounds. When the cursor already exhausts the sequence the
/// window is empty and the cursor is returned unchanged.
///
/// # Examples
///
/// ```
/// use tomeshelf::browse::pager;
///
/// let results: Vec<u32> = (0..100).collect();
/// let (window, cursor) = pager::next_page(&results, 2, 36);
/// assert_eq!(window.len(), 28);
/// assert_eq!(cursor, 3);
///
/// let (empty, unchanged) = pager::next_page(&results, 3, 36);
/// assert!(empty.is_empty());
/// assert_eq!(unchanged, 3);
/// ```
#[must_use]
pub fn next_page<T>(results: &[T], cursor: usize, page_size: usize) -> (&[T], usize) {
    let start = cursor.saturating_mul(page_size).min(results.len());
    let end = start.saturating_add(page_size).min(results.len());
    let window = &results[start..end];

    let next_cursor = if window.is_empty() { cursor } else { cursor + 1 };
    (window, next_cursor)
}

/// Returns how many results remain beyond the rendered pages.
///
/// `max(0, total − cursor·page_size)`; drives the "show more" label and
/// enabled state.
#[must_use]
pub fn remaining(total: usize, cursor: usize, page_size: usize) -> usize {
    total.saturating_sub(cursor.saturating_mul(page_size))
}

/// Returns `true` when another non-empty page exists.
#[must_use]
pub fn has_more(total: usize, cursor: usize, page_size: usize) -> bool {
    remaining(total, cursor, page_size) > 0
}
