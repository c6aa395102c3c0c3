use crate::search::NOT_FOUND;
use num_traits::PrimInt;

/// Find the leftmost index of `query` in sorted `data` by recursing on copied sub-sequences.
///
/// Returns [`NOT_FOUND`] (`-1`) if `query` is absent. Indices found in a right-hand copy are
/// re-offset by `mid + 1` as the recursion unwinds; left-hand copies share the current origin
/// so their results pass through unchanged.
///
/// Every level allocates an owned `Vec` for the half it descends into, so a call costs O(n)
/// in copying rather than O(log n) comparisons alone. This is kept on purpose as a contrast
/// with [`binary_search_iterative`](crate::search::binary_search_iterative) and
/// [`binary_search_bounded_recursion`](crate::search::binary_search_bounded_recursion).
/// Recursing on borrowed sub-slices instead would move it into their performance class.
///
/// ```rust
/// # use karatechop::search::binary_search_subsequence_recursion;
/// assert_eq!(binary_search_subsequence_recursion(5, &[1, 3, 5, 7]), 2);
/// assert_eq!(binary_search_subsequence_recursion(1, &[1, 1, 3, 5, 7]), 0);
/// ```
pub fn binary_search_subsequence_recursion<T: PrimInt>(query: T, data: &[T]) -> isize {
    let mid = (data.len() as isize - 1).div_euclid(2);
    if mid < 0 {
        return NOT_FOUND;
    }
    let split = mid as usize;
    let value = data[split];
    if value > query {
        binary_search_subsequence_recursion(query, &data[..split].to_vec())
    } else if value < query {
        match binary_search_subsequence_recursion(query, &data[split + 1..].to_vec()) {
            NOT_FOUND => NOT_FOUND,
            pos => mid + 1 + pos,
        }
    } else {
        match binary_search_subsequence_recursion(query, &data[..split].to_vec()) {
            NOT_FOUND => mid,
            pos => pos,
        }
    }
}
