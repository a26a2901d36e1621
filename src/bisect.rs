use std::cmp::Ordering;

use crate::BisectError;

/// Key types the bisection functions and `SortedArray` can order by.
///
/// Anything `PartialOrd` qualifies: strings, integers, floats, `SystemTime`,
/// chrono dates and so on. For float keys, NaN is the caller's problem, the
/// search treats it like any other value that is neither less nor greater.
pub trait Comparable: PartialOrd {}

impl<T> Comparable for T where T: PartialOrd + ?Sized {}

/// Three way comparison used for sorting, consistent with the bisection functions.
///
/// Incomparable pairs (e.g. NaN) are reported as `Equal`.
#[inline]
pub fn compare_keys<C: Comparable + ?Sized>(a: &C, b: &C) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Find the insertion point for `needle` in sorted `arr`. If `needle` already
/// appears in `arr`, the insertion point is to the left of any existing entries.
///
/// # Examples
/// ```rust
/// use sorted_keyed_array::bisect_left;
///
/// assert_eq!(bisect_left(&[1, 2, 2, 3], &2), 1);
/// assert_eq!(bisect_left(&[1, 2, 2, 3], &4), 4);
/// ```
#[inline]
pub fn bisect_left<C: Comparable>(arr: &[C], needle: &C) -> usize {
    bisect_left_range(arr, needle, 0, arr.len())
}

/// Find the insertion point for `needle` in sorted `arr`. If `needle` already
/// appears in `arr`, the insertion point is to the right of any existing entries.
///
/// # Examples
/// ```rust
/// use sorted_keyed_array::bisect_right;
///
/// assert_eq!(bisect_right(&[1, 2, 2, 3], &2), 3);
/// assert_eq!(bisect_right(&[1, 2, 2, 3], &0), 0);
/// ```
#[inline]
pub fn bisect_right<C: Comparable>(arr: &[C], needle: &C) -> usize {
    bisect_right_range(arr, needle, 0, arr.len())
}

/// `bisect_left` restricted to `[lo, hi)`, `hi` defaults to `arr.len()`.
///
/// `hi` is not checked against `arr.len()` or `lo`. If `lo >= hi` no
/// comparison is made and `lo` is returned.
///
/// # Errors
/// Returns `BisectError::InvalidArgument` if `lo` is negative.
///
/// # Panics
/// Panics if `hi > arr.len()` and the search probes past the end of `arr`.
///
/// # Examples
/// ```rust
/// use sorted_keyed_array::{bisect_left_in, BisectError};
///
/// let arr = [1, 1, 2, 2, 3];
/// assert_eq!(bisect_left_in(&arr, &1, 1, None), Ok(1));
/// assert_eq!(bisect_left_in(&arr, &3, 0, Some(3)), Ok(3));
/// assert_eq!(
///     bisect_left_in(&arr, &1, -1, None),
///     Err(BisectError::InvalidArgument { lo: -1 })
/// );
/// ```
pub fn bisect_left_in<C: Comparable>(
    arr: &[C],
    needle: &C,
    lo: isize,
    hi: Option<usize>,
) -> Result<usize, BisectError> {
    let lo = check_lo(lo)?;
    Ok(bisect_left_range(arr, needle, lo, hi.unwrap_or(arr.len())))
}

/// `bisect_right` restricted to `[lo, hi)`, `hi` defaults to `arr.len()`.
///
/// Same bound rules as [`bisect_left_in`].
///
/// # Errors
/// Returns `BisectError::InvalidArgument` if `lo` is negative.
///
/// # Panics
/// Panics if `hi > arr.len()` and the search probes past the end of `arr`.
pub fn bisect_right_in<C: Comparable>(
    arr: &[C],
    needle: &C,
    lo: isize,
    hi: Option<usize>,
) -> Result<usize, BisectError> {
    let lo = check_lo(lo)?;
    Ok(bisect_right_range(arr, needle, lo, hi.unwrap_or(arr.len())))
}

#[inline]
fn check_lo(lo: isize) -> Result<usize, BisectError> {
    usize::try_from(lo).map_err(|_| BisectError::InvalidArgument { lo })
}

/// first idx in [lo, hi) with !(arr[idx] < needle), or hi
pub(crate) fn bisect_left_range<C: Comparable>(
    arr: &[C],
    needle: &C,
    mut lo: usize,
    mut hi: usize,
) -> usize {
    while lo < hi {
        // lo < hi, so this never overflows
        let mid = lo + (hi - lo) / 2;
        if arr[mid] < *needle {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// first idx in [lo, hi) with needle < arr[idx], or hi
pub(crate) fn bisect_right_range<C: Comparable>(
    arr: &[C],
    needle: &C,
    mut lo: usize,
    mut hi: usize,
) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if *needle < arr[mid] {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
