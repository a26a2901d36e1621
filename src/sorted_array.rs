use std::cmp::Ordering;
use std::fmt;

use crate::bisect::{bisect_left_range, bisect_right_range};
use crate::{bisect_left_in, bisect_right_in, compare_keys, BisectError, Comparable};

/// Vec backed container which keeps its elements sorted by a derived key.
///
/// Keys are computed once per element by the key function and cached in a
/// vec parallel to the values, so searching never calls the key function
/// again. Elements with equal keys keep the order they arrived in.
///
/// The key function must be deterministic, and an element's key must not
/// change while it is stored (e.g. through interior mutability). Neither is
/// checked.
///
/// # Example
/// ```rust
/// use sorted_keyed_array::SortedArray;
///
/// let mut arr = SortedArray::from_vec(|s: &&str| s.len(), vec!["ccc", "a", "bb"]);
/// assert_eq!(arr.as_slice(), &["a", "bb", "ccc"]);
///
/// arr.insert("dd");
/// assert_eq!(arr.as_slice(), &["a", "bb", "dd", "ccc"]);
///
/// let (start, end) = arr.range_inclusive(&2, &3);
/// assert_eq!(arr.remove_range(start, end), vec!["bb", "dd", "ccc"]);
/// assert_eq!(arr.len(), 1);
/// ```
#[derive(Clone)]
pub struct SortedArray<T, K, F>
where
    F: Fn(&T) -> K,
{
    key_fn: F,
    values: Vec<T>,
    keys: Vec<K>,
}

impl<T, K, F> SortedArray<T, K, F>
where
    K: Comparable,
    F: Fn(&T) -> K,
{
    /// Create an empty SortedArray ordered by `key_fn`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let arr = SortedArray::new(|v: &u32| *v);
    /// assert!(arr.is_empty());
    /// ```
    pub fn new(key_fn: F) -> Self {
        Self {
            key_fn,
            values: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Create a SortedArray from `values`, sorting them by `key_fn`.
    ///
    /// The sort is stable, equal keys keep their relative order in `values`.
    pub fn from_vec(key_fn: F, values: Vec<T>) -> Self {
        let mut pairs = values
            .into_iter()
            .map(|v| (key_fn(&v), v))
            .collect::<Vec<_>>();
        pairs.sort_by(|a, b| compare_keys(&a.0, &b.0));

        let (keys, values): (Vec<K>, Vec<T>) = pairs.into_iter().unzip();
        Self {
            key_fn,
            values,
            keys,
        }
    }

    /// Create a SortedArray from a copy of `values`. `values` itself is left untouched.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let input = vec![3, 1, 2];
    /// let arr = SortedArray::from_slice(|v: &i32| *v, &input);
    ///
    /// assert_eq!(arr.as_slice(), &[1, 2, 3]);
    /// assert_eq!(input, vec![3, 1, 2]);
    /// ```
    pub fn from_slice(key_fn: F, values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(key_fn, values.to_vec())
    }

    /// Create a SortedArray from any iterator of values
    pub fn from_iter_with<I: IntoIterator<Item = T>>(key_fn: F, iter: I) -> Self {
        Self::from_vec(key_fn, iter.into_iter().collect())
    }

    /// Returns element count
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there is no element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The elements, in key order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// The cached keys, `keys()[i]` is the key of `as_slice()[i]`
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Apply the container's key function to `value`
    #[inline]
    pub fn key_of(&self, value: &T) -> K {
        (self.key_fn)(value)
    }

    /// Returns the element comparator derived from the key function.
    ///
    /// # Examples
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let arr = SortedArray::new(|s: &String| s.len());
    /// let cmp = arr.comparator();
    ///
    /// assert_eq!(cmp(&"ab".to_string(), &"c".to_string()), Ordering::Greater);
    /// assert_eq!(cmp(&"ab".to_string(), &"cd".to_string()), Ordering::Equal);
    /// ```
    pub fn comparator(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| compare_keys(&(self.key_fn)(a), &(self.key_fn)(b))
    }

    /// Leftmost position at which an element keyed `needle` could be inserted
    #[inline]
    pub fn bisect_left(&self, needle: &K) -> usize {
        bisect_left_range(&self.keys, needle, 0, self.keys.len())
    }

    /// Rightmost position at which an element keyed `needle` could be inserted
    #[inline]
    pub fn bisect_right(&self, needle: &K) -> usize {
        bisect_right_range(&self.keys, needle, 0, self.keys.len())
    }

    /// [`bisect_left_in`](crate::bisect_left_in) over the cached keys, `hi` defaults to `len()`
    pub fn bisect_left_in(
        &self,
        needle: &K,
        lo: isize,
        hi: Option<usize>,
    ) -> Result<usize, BisectError> {
        bisect_left_in(&self.keys, needle, lo, hi)
    }

    /// [`bisect_right_in`](crate::bisect_right_in) over the cached keys, `hi` defaults to `len()`
    pub fn bisect_right_in(
        &self,
        needle: &K,
        lo: isize,
        hi: Option<usize>,
    ) -> Result<usize, BisectError> {
        bisect_right_in(&self.keys, needle, lo, hi)
    }

    /// Insert `value` after every element with an equal key, returns the index it landed at.
    ///
    /// Locating the slot is O(log n), shifting the tail is O(n).
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let mut arr = SortedArray::new(|p: &(u8, char)| p.0);
    /// assert_eq!(arr.insert((1, 'a')), 0);
    /// assert_eq!(arr.insert((0, 'b')), 0);
    /// assert_eq!(arr.insert((1, 'c')), 2);
    /// assert_eq!(arr.as_slice(), &[(0, 'b'), (1, 'a'), (1, 'c')]);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let key = (self.key_fn)(&value);
        let idx = self.bisect_right(&key);
        self.values.insert(idx, value);
        self.keys.insert(idx, key);
        idx
    }

    /// Index span `[start, end)` of all elements whose key `k` satisfies
    /// `start_key <= k <= last_key`.
    ///
    /// If `start_key > last_key` the span is empty (`start == end`).
    pub fn range_inclusive(&self, start_key: &K, last_key: &K) -> (usize, usize) {
        let left = self.bisect_left(start_key);
        // nothing before `left` can qualify
        let right = bisect_right_range(&self.keys, last_key, left, self.keys.len());
        (left, right)
    }

    /// Elements whose key lies in `[start_key, last_key]`
    pub fn range_slice_inclusive(&self, start_key: &K, last_key: &K) -> &[T] {
        let (start, end) = self.range_inclusive(start_key, last_key);
        &self.values[start..end]
    }

    /// Remove elements in index span `[start, end)` and return them in order.
    ///
    /// Indices past `len()` are clamped, and a span with `end <= start` removes nothing.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let mut arr = SortedArray::from_vec(|v: &i32| *v, vec![5, 1, 4, 2, 3]);
    ///
    /// assert_eq!(arr.remove_range(1, 3), vec![2, 3]);
    /// assert_eq!(arr.remove_range(2, 100), vec![5]);
    /// assert!(arr.remove_range(1, 0).is_empty());
    /// assert_eq!(arr.as_slice(), &[1, 4]);
    /// ```
    pub fn remove_range(&mut self, start: usize, end: usize) -> Vec<T> {
        let end = end.min(self.values.len());
        let start = start.min(end);

        self.keys.drain(start..end);
        self.values.drain(start..end).collect()
    }

    /// Remove every element whose key lies in `[start_key, last_key]`
    pub fn remove_range_inclusive(&mut self, start_key: &K, last_key: &K) -> Vec<T> {
        let (start, end) = self.range_inclusive(start_key, last_key);
        self.remove_range(start, end)
    }

    /// Returns true if an element equal to `value` is stored.
    ///
    /// Only elements sharing `value`'s key are compared, but all of them are.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(value, |a, b| a == b)
    }

    /// Like [`contains`](Self::contains), with a caller supplied equality
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keyed_array::SortedArray;
    ///
    /// let arr = SortedArray::from_vec(
    ///     |p: &(u32, &str)| p.0,
    ///     vec![(1, "a"), (1, "b"), (1, "c"), (2, "d")],
    /// );
    ///
    /// assert!(arr.contains_by(&(1, "C"), |a, b| a.1.eq_ignore_ascii_case(b.1)));
    /// assert!(!arr.contains_by(&(2, "a"), |a, b| a.1 == b.1));
    /// ```
    pub fn contains_by<E>(&self, value: &T, eq: E) -> bool
    where
        E: Fn(&T, &T) -> bool,
    {
        let key = (self.key_fn)(value);
        let start = self.bisect_left(&key);
        let end = bisect_right_range(&self.keys, &key, start, self.keys.len());

        self.values[start..end].iter().any(|v| eq(v, value))
    }

    /// Returns the element at `idx`
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    /// Returns the element with the smallest key
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns the element with the largest key
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.keys.clear();
    }

    /// Iterate elements in key order.
    ///
    /// The iterator borrows the container, so it can't change during a pass.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consume self and return the sorted elements
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    #[cfg(test)]
    fn validate(&self) {
        assert_eq!(self.values.len(), self.keys.len());
        for (v, k) in self.values.iter().zip(self.keys.iter()) {
            assert!((self.key_fn)(v) == *k);
        }
        for pair in self.keys.windows(2) {
            assert!(!(pair[1] < pair[0]));
        }
    }
}

impl<T, K, F> AsRef<[T]> for SortedArray<T, K, F>
where
    K: Comparable,
    F: Fn(&T) -> K,
{
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, K, F> Extend<T> for SortedArray<T, K, F>
where
    K: Comparable,
    F: Fn(&T) -> K,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, T, K, F> IntoIterator for &'a SortedArray<T, K, F>
where
    K: Comparable,
    F: Fn(&T) -> K,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, K, F> IntoIterator for SortedArray<T, K, F>
where
    K: Comparable,
    F: Fn(&T) -> K,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T, K, F> fmt::Debug for SortedArray<T, K, F>
where
    T: fmt::Debug,
    F: Fn(&T) -> K,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

/// ensure SortedArray is send when its parts are
fn _ensure_send<T: Send>() {
    fn _assert_send<S: Send>() {}
    _assert_send::<SortedArray<T, u64, fn(&T) -> u64>>();
}
