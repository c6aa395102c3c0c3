use crate::search::NOT_FOUND;
use log::trace;
use num_traits::PrimInt;

/// Find the leftmost index of `query` in sorted `data` by narrowing explicit bounds in a loop.
///
/// Returns [`NOT_FOUND`] (`-1`) if `query` is absent.
///
/// A match does not stop the loop: the position is recorded and the search continues in
/// the left half, since an earlier duplicate may exist.
///
/// Examples
/// --------
/// ```rust
/// # use karatechop::search::binary_search_iterative;
/// let data = [1, 3, 3, 3, 5, 7];
/// assert_eq!(binary_search_iterative(3, &data), 1);
/// assert_eq!(binary_search_iterative(4, &data), -1);
/// ```
pub fn binary_search_iterative<T: PrimInt>(query: T, data: &[T]) -> isize {
    let mut pos = NOT_FOUND;
    let mut start: isize = 0;
    let mut end: isize = data.len() as isize - 1;

    while start <= end {
        let mid = (start + end) / 2; // both non-negative, so this is the floor
        let value = data[mid as usize];
        if value > query {
            end = mid - 1;
        } else if value < query {
            start = mid + 1;
        } else {
            pos = mid;
            end = mid - 1;
        }
        trace!("iterative narrowed to [{}, {}] with pos {}", start, end, pos);
    }
    pos
}
