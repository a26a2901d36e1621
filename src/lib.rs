//! Sorted containers built on python style bisection.
//!
//! [`bisect_left`] and [`bisect_right`] find insertion points in any sorted
//! slice. [`SortedArray`] keeps elements ordered by a key derived from each
//! element, and answers key range queries with the same functions.

mod error;
pub use error::*;

mod bisect;
pub use bisect::*;

mod sorted_array;
pub use sorted_array::*;
