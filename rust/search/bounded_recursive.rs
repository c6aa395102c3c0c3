use crate::search::NOT_FOUND;
use num_traits::PrimInt;

/// Find the leftmost index of `query` in sorted `data` by recursing over `(start, end)` bounds.
///
/// Returns [`NOT_FOUND`] (`-1`) if `query` is absent. The slice is never copied; only the
/// bounds shrink, so the recursion depth is O(log n).
///
/// ```rust
/// # use karatechop::search::binary_search_bounded_recursion;
/// assert_eq!(binary_search_bounded_recursion(7, &[1, 3, 5, 7]), 3);
/// assert_eq!(binary_search_bounded_recursion(8, &[1, 3, 5, 7]), -1);
/// ```
pub fn binary_search_bounded_recursion<T: PrimInt>(query: T, data: &[T]) -> isize {
    bounded_recursion(query, data, 0, data.len() as isize - 1)
}

/// Search the closed index interval `[start, end]` of `data`.
fn bounded_recursion<T: PrimInt>(query: T, data: &[T], start: isize, end: isize) -> isize {
    if start > end {
        return NOT_FOUND;
    }
    let mid = (start + end) / 2;
    let value = data[mid as usize];
    if value > query {
        bounded_recursion(query, data, start, mid - 1)
    } else if value < query {
        bounded_recursion(query, data, mid + 1, end)
    } else {
        match bounded_recursion(query, data, start, mid - 1) {
            NOT_FOUND => mid,
            earlier => earlier,
        }
    }
}
