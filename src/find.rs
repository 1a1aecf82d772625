use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::error::{Error, Result};

/// Returns the index of the first occurrence of `element`, if any.
pub fn index_of<T: PartialEq>(collection: &[T], element: &T) -> Option<usize> {
    collection.iter().position(|item| item == element)
}

/// Returns the index of the last occurrence of `element`, if any.
pub fn last_index_of<T: PartialEq>(collection: &[T], element: &T) -> Option<usize> {
    collection.iter().rposition(|item| item == element)
}

/// Returns the first element satisfying the predicate.
pub fn find<T>(collection: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    collection.iter().find(|&item| predicate(item))
}

/// Returns the first element satisfying the predicate together with its index.
pub fn find_index_of<T>(
    collection: &[T],
    predicate: impl Fn(&T) -> bool,
) -> Option<(usize, &T)> {
    collection
        .iter()
        .enumerate()
        .find(|&(_, item)| predicate(item))
}

/// Returns the last element satisfying the predicate together with its index.
pub fn find_last_index_of<T>(
    collection: &[T],
    predicate: impl Fn(&T) -> bool,
) -> Option<(usize, &T)> {
    collection
        .iter()
        .enumerate()
        .rev()
        .find(|&(_, item)| predicate(item))
}

/// Returns the first element satisfying the predicate, or `fallback`.
pub fn find_or_else<T: Clone>(
    collection: &[T],
    fallback: T,
    predicate: impl Fn(&T) -> bool,
) -> T {
    find(collection, predicate).cloned().unwrap_or(fallback)
}

/// Returns a key whose value equals `value`. Which key is returned is
/// unspecified when several values match.
pub fn find_key<'a, K, V: PartialEq>(object: &'a HashMap<K, V>, value: &V) -> Option<&'a K> {
    object.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
}

/// Returns a key whose entry satisfies the predicate.
pub fn find_key_by<K, V>(
    object: &HashMap<K, V>,
    predicate: impl Fn(&K, &V) -> bool,
) -> Option<&K> {
    object
        .iter()
        .find(|&(k, v)| predicate(k, v))
        .map(|(k, _)| k)
}

/// Returns the elements that appear exactly once, in first-seen order.
pub fn find_uniques<T: Clone + Eq + Hash>(collection: &[T]) -> Vec<T> {
    let mut duplicated = HashMap::with_capacity(collection.len());

    for item in collection {
        let seen = duplicated.contains_key(item);
        duplicated.insert(item.clone(), seen);
    }

    collection
        .iter()
        .filter(|item| !duplicated[*item])
        .cloned()
        .collect()
}

/// Like [`find_uniques`], comparing by the key produced by `iteratee`.
pub fn find_uniques_by<T: Clone, U: Eq + Hash>(
    collection: &[T],
    iteratee: impl Fn(&T) -> U,
) -> Vec<T> {
    let mut duplicated = HashMap::with_capacity(collection.len());

    for item in collection {
        let key = iteratee(item);
        let seen = duplicated.contains_key(&key);
        duplicated.insert(key, seen);
    }

    collection
        .iter()
        .filter(|&item| !duplicated[&iteratee(item)])
        .cloned()
        .collect()
}

/// Returns the elements that appear more than once, deduplicated, in
/// first-seen order.
pub fn find_duplicates<T: Clone + Eq + Hash>(collection: &[T]) -> Vec<T> {
    let mut duplicated = HashMap::with_capacity(collection.len());

    for item in collection {
        let seen = duplicated.contains_key(item);
        duplicated.insert(item.clone(), seen);
    }

    let mut result = Vec::new();

    for item in collection {
        if duplicated[item] {
            duplicated.insert(item.clone(), false);
            result.push(item.clone());
        }
    }

    result
}

/// Like [`find_duplicates`], comparing by the key produced by `iteratee`.
pub fn find_duplicates_by<T: Clone, U: Eq + Hash>(
    collection: &[T],
    iteratee: impl Fn(&T) -> U,
) -> Vec<T> {
    let mut duplicated = HashMap::with_capacity(collection.len());

    for item in collection {
        let key = iteratee(item);
        let seen = duplicated.contains_key(&key);
        duplicated.insert(key, seen);
    }

    let mut result = Vec::new();

    for item in collection {
        let key = iteratee(item);
        if duplicated[&key] {
            duplicated.insert(key, false);
            result.push(item.clone());
        }
    }

    result
}

/// Returns the last element, failing on an empty collection.
pub fn last<T>(collection: &[T]) -> Result<&T> {
    collection.last().ok_or(Error::EmptyCollection)
}

/// Returns the element at index `n`; a negative `n` counts from the back.
/// Fails when `n` is out of bounds either way.
pub fn nth<T>(collection: &[T], n: isize) -> Result<&T> {
    let len = collection.len();

    if n >= len as isize || -n > len as isize {
        return Err(Error::OutOfBounds { index: n, len });
    }

    let index = if n >= 0 { n as usize } else { len - n.unsigned_abs() };
    Ok(&collection[index])
}

/// Returns one random element, or `None` for an empty collection.
pub fn sample<'a, T, R: Rng + ?Sized>(collection: &'a [T], rng: &mut R) -> Option<&'a T> {
    if collection.is_empty() {
        return None;
    }

    Some(&collection[rng.random_range(0..collection.len())])
}

/// Returns up to `count` random elements, each position drawn at most once.
pub fn samples<T: Clone, R: Rng + ?Sized>(
    collection: &[T],
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut pool = collection.to_vec();
    let mut results = Vec::with_capacity(count.min(pool.len()));

    for _ in 0..count.min(collection.len()) {
        let index = rng.random_range(0..pool.len());
        // Swap-and-pop removal keeps each draw O(1).
        let last_index = pool.len() - 1;
        pool.swap(index, last_index);
        if let Some(item) = pool.pop() {
            results.push(item);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(&[0, 1, 2, 1], &1), Some(1));
        assert_eq!(index_of(&[0, 1, 2, 1], &3), None);
        assert_eq!(last_index_of(&[0, 1, 2, 1], &1), Some(3));
        assert_eq!(last_index_of(&[0, 1, 2, 1], &3), None);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(&[1, 2, 3, 4], |&x| x % 2 == 0), Some(&2));
        assert_eq!(find(&[1, 3], |&x| x % 2 == 0), None);

        assert_eq!(find_index_of(&[1, 2, 3, 4], |&x| x % 2 == 0), Some((1, &2)));
        assert_eq!(find_last_index_of(&[1, 2, 3, 4], |&x| x % 2 == 0), Some((3, &4)));
        assert_eq!(find_index_of(&[1, 3], |&x| x % 2 == 0), None);

        assert_eq!(find_or_else(&[1, 2, 3], 0, |&x| x > 2), 3);
        assert_eq!(find_or_else(&[1, 2, 3], 0, |&x| x > 9), 0);
    }

    #[test]
    fn test_find_key() {
        let object = HashMap::from([("foo", 1), ("bar", 2)]);
        assert_eq!(find_key(&object, &2), Some(&"bar"));
        assert_eq!(find_key(&object, &9), None);
        assert_eq!(find_key_by(&object, |&k, _| k == "foo"), Some(&"foo"));
        assert_eq!(find_key_by(&object, |_, &v| v > 9), None);
    }

    #[test]
    fn test_find_uniques() {
        assert_eq!(find_uniques(&[1, 2, 2, 1, 3]), vec![3]);
        assert_eq!(find_uniques(&[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(find_uniques::<i32>(&[]), Vec::<i32>::new());

        let result = find_uniques_by(&[0, 3, 4, 6], |&x| x % 3);
        assert_eq!(result, vec![4]);
    }

    #[test]
    fn test_find_duplicates() {
        assert_eq!(find_duplicates(&[1, 2, 2, 1, 3, 2]), vec![2, 1]);
        assert_eq!(find_duplicates(&[1, 2, 3]), Vec::<i32>::new());

        let result = find_duplicates_by(&[3, 4, 5, 6, 7], |&x| x % 3);
        assert_eq!(result, vec![3, 4]);
    }

    #[test]
    fn test_last() {
        assert_eq!(last(&[1, 2, 3]), Ok(&3));
        assert_eq!(last::<i32>(&[]), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_nth() {
        let items = [10, 20, 30];
        assert_eq!(nth(&items, 0), Ok(&10));
        assert_eq!(nth(&items, 2), Ok(&30));
        assert_eq!(nth(&items, -1), Ok(&30));
        assert_eq!(nth(&items, -3), Ok(&10));
        assert_eq!(nth(&items, 3), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(nth(&items, -4), Err(Error::OutOfBounds { index: -4, len: 3 }));
    }

    #[test]
    fn test_sample() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [1, 2, 3, 4, 5];

        let picked = sample(&items, &mut rng).copied();
        assert!(picked.is_some_and(|x| items.contains(&x)));
        assert_eq!(sample::<i32, _>(&[], &mut rng), None);
    }

    #[test]
    fn test_samples_are_unique_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [1, 2, 3, 4, 5];

        let mut picked = samples(&items, 5, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, vec![1, 2, 3, 4, 5]);

        assert_eq!(samples(&items, 0, &mut rng), Vec::<i32>::new());
        assert_eq!(samples(&items, 100, &mut rng).len(), 5);
    }
}
