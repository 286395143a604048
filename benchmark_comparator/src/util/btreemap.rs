//!
//! Utility functions for sorted maps.
//!

use std::collections::BTreeMap;

/// Intersects two `BTreeMap` instances and merges their entries using a
/// specified merger function.
///
/// # Arguments
///
/// * `map1` - The first map.
/// * `map2` - The second map. Matching entries are removed from it.
/// * `merger` - A closure that takes a key and a value from each map, and
///   returns the merged result.
///
/// # Returns
///
/// An iterator over the merged results, in key order.
///
/// # Example
///
/// ```rust
/// use benchmark_comparator::util::btreemap::intersect_map;
///
/// let first = [(1, 1), (2, 2), (3, 3)];
/// let second = [(1, 10), (3, 30)];
/// let expected: Vec<_> = [111, 333].into();
/// assert_eq!(
///     intersect_map(first.into(), second.into(), |k, v1, v2| 100 * k + v1 + v2)
///         .collect::<Vec<_>>(),
///     expected
/// )
/// ```
pub fn intersect_map<'a, K, V1, V2, R>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
    merger: impl Fn(K, V1, V2) -> R + 'a,
) -> impl Iterator<Item = R> + 'a
where
    K: Ord + 'a,
    V1: 'a,
    V2: 'a,
{
    map1.into_iter().filter_map(move |(key, value1)| {
        map2.remove(&key).map(|value2| merger(key, value1, value2))
    })
}

/// Returns the keys of `map1` that are missing from `map2`, in key order.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use benchmark_comparator::util::btreemap::difference_keys;
///
/// let first: BTreeMap<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
/// let second: BTreeMap<_, _> = [(2, 20)].into();
/// assert_eq!(difference_keys(&first, &second).collect::<Vec<_>>(), vec![&1, &3]);
/// ```
pub fn difference_keys<'a, K, V1, V2>(
    map1: &'a BTreeMap<K, V1>,
    map2: &'a BTreeMap<K, V2>,
) -> impl Iterator<Item = &'a K> + 'a
where
    K: Ord,
{
    map1.keys().filter(move |key| !map2.contains_key(*key))
}
