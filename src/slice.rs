use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Keeps the elements for which the index-aware predicate returns true.
pub fn filter<T: Clone>(collection: &[T], predicate: impl Fn(usize, &T) -> bool) -> Vec<T> {
    let mut result = Vec::with_capacity(collection.len());

    for (i, item) in collection.iter().enumerate() {
        if predicate(i, item) {
            result.push(item.clone());
        }
    }

    result
}

/// Runs `iteratee` over every element together with its index.
pub fn for_each<T>(collection: &[T], mut iteratee: impl FnMut(usize, &T)) {
    for (i, item) in collection.iter().enumerate() {
        iteratee(i, item);
    }
}

/// Deduplicates the collection, keeping the first occurrence of each value.
pub fn unique<T: Clone + Eq + Hash>(collection: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(collection.len());
    let mut result = Vec::with_capacity(collection.len());

    for item in collection {
        if seen.insert(item.clone()) {
            result.push(item.clone());
        }
    }

    result
}

/// Deduplicates by the key produced by `iteratee`, keeping first occurrences.
pub fn unique_by<T: Clone, U: Eq + Hash>(
    collection: &[T],
    iteratee: impl Fn(&T) -> U,
) -> Vec<T> {
    let mut seen = HashSet::with_capacity(collection.len());
    let mut result = Vec::with_capacity(collection.len());

    for item in collection {
        if seen.insert(iteratee(item)) {
            result.push(item.clone());
        }
    }

    result
}

/// Groups elements by the key produced by `iteratee`.
pub fn group_by<T: Clone, U: Eq + Hash>(
    collection: &[T],
    iteratee: impl Fn(&T) -> U,
) -> HashMap<U, Vec<T>> {
    let mut result: HashMap<U, Vec<T>> = HashMap::new();

    for item in collection {
        result.entry(iteratee(item)).or_default().push(item.clone());
    }

    result
}

/// Reverses the collection in place.
pub fn reverse<T>(collection: &mut [T]) {
    let length = collection.len();

    for i in 0..length / 2 {
        collection.swap(i, length - i - 1);
    }
}

/// Returns a collection of the same length with every slot set to `initial`.
pub fn fill<T: Clone>(collection: &[T], initial: &T) -> Vec<T> {
    collection.iter().map(|_| initial.clone()).collect()
}

/// Builds a collection of `count` clones of `initial`.
pub fn repeat<T: Clone>(count: usize, initial: &T) -> Vec<T> {
    (0..count).map(|_| initial.clone()).collect()
}

/// Builds a collection of `count` elements produced by `predicate(index)`.
pub fn repeat_by<T>(count: usize, predicate: impl Fn(usize) -> T) -> Vec<T> {
    (0..count).map(predicate).collect()
}

/// Turns a collection into a map via a key-value transform.
/// Later elements overwrite earlier ones on key collision.
pub fn slice_to_map<T, K: Eq + Hash, V>(
    collection: &[T],
    transform: impl Fn(&T) -> (K, V),
) -> HashMap<K, V> {
    collection.iter().map(&transform).collect()
}

/// Counts occurrences of `value` in the collection.
pub fn count<T: PartialEq>(collection: &[T], value: &T) -> usize {
    collection.iter().filter(|item| *item == value).count()
}

/// Counts occurrences of every value in the collection.
pub fn count_values<T: Clone + Eq + Hash>(collection: &[T]) -> HashMap<T, usize> {
    let mut result = HashMap::new();

    for item in collection {
        *result.entry(item.clone()).or_insert(0) += 1;
    }

    result
}

/// Returns the subslice `[start, end)`, clamping both bounds into range
/// instead of panicking. `start >= end` yields an empty slice.
pub fn slice<T>(collection: &[T], start: isize, end: isize) -> &[T] {
    let size = collection.len();

    if start >= end {
        return &[];
    }

    let start = start.clamp(0, size as isize) as usize;
    let end = end.clamp(0, size as isize) as usize;

    &collection[start..end]
}

/// Replaces up to `n` occurrences of `old` with `new`. A negative `n`
/// replaces every occurrence.
pub fn replace<T: Clone + PartialEq>(collection: &[T], old: &T, new: &T, n: isize) -> Vec<T> {
    let mut remaining = n;
    let mut result = collection.to_vec();

    for item in result.iter_mut() {
        if item == old && remaining != 0 {
            *item = new.clone();
            remaining -= 1;
        }
    }

    result
}

/// Replaces every occurrence of `old` with `new`.
pub fn replace_all<T: Clone + PartialEq>(collection: &[T], old: &T, new: &T) -> Vec<T> {
    replace(collection, old, new, -1)
}

/// Inserts `values` at `index`, clamping a negative index to the front and a
/// past-the-end index to the back.
pub fn insert_at<T>(mut collection: Vec<T>, index: isize, values: Vec<T>) -> Vec<T> {
    let index = index.clamp(0, collection.len() as isize) as usize;
    collection.splice(index..index, values);
    collection
}

/// Drops the last `n` elements, saturating at an empty collection.
pub fn drop_right<T>(mut collection: Vec<T>, n: usize) -> Vec<T> {
    let keep = collection.len().saturating_sub(n);
    collection.truncate(keep);
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter() {
        let result = filter(&[1, 2, 3, 4], |_, &x| x % 2 == 0);
        assert_eq!(result, vec![2, 4]);

        let result = filter(&["", "foo", "", "bar", ""], |_, x| !x.is_empty());
        assert_eq!(result, vec!["foo", "bar"]);
    }

    #[test]
    fn test_for_each() {
        let mut indexes = Vec::new();
        let mut items = Vec::new();
        for_each(&["a", "b", "c"], |i, &item| {
            indexes.push(i);
            items.push(item);
        });
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 2, 2, 1]), vec![1, 2]);
        assert_eq!(unique(&[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_by() {
        let result = unique_by(&[0, 1, 2, 3, 4, 5], |&x| x % 3);
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_group_by() {
        let result = group_by(&[0, 1, 2, 3, 4, 5], |&x| x % 3);
        assert_eq!(result[&0], vec![0, 3]);
        assert_eq!(result[&1], vec![1, 4]);
        assert_eq!(result[&2], vec![2, 5]);
    }

    #[test]
    fn test_reverse() {
        let mut items = vec![1, 2, 3, 4];
        reverse(&mut items);
        assert_eq!(items, vec![4, 3, 2, 1]);

        let mut items = vec![1, 2, 3];
        reverse(&mut items);
        assert_eq!(items, vec![3, 2, 1]);

        let mut items: Vec<i32> = vec![];
        reverse(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn test_fill_and_repeat() {
        assert_eq!(fill(&[1, 2, 3], &0), vec![0, 0, 0]);
        assert_eq!(repeat(3, &"x"), vec!["x", "x", "x"]);
        assert_eq!(repeat(0, &"x"), Vec::<&str>::new());
        assert_eq!(repeat_by(4, |i| i * i), vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_slice_to_map() {
        let result = slice_to_map(&["ab", "cd"], |s| (s.chars().next().unwrap(), s.len()));
        assert_eq!(result[&'a'], 2);
        assert_eq!(result[&'c'], 2);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&[1, 5, 1], &1), 2);
        assert_eq!(count(&[1, 5, 1], &3), 0);

        let values = count_values(&["a", "b", "a"]);
        assert_eq!(values[&"a"], 2);
        assert_eq!(values[&"b"], 1);
    }

    #[test]
    fn test_slice_clamps_bounds() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(slice(&items, 1, 3), &[2, 3]);
        assert_eq!(slice(&items, -3, 2), &[1, 2]);
        assert_eq!(slice(&items, 3, 100), &[4, 5]);
        assert_eq!(slice(&items, 3, 2), &[] as &[i32]);
        assert_eq!(slice(&items, 7, 10), &[] as &[i32]);
    }

    #[test]
    fn test_replace() {
        let items = [0, 1, 0, 1, 2];
        assert_eq!(replace(&items, &0, &42, 1), vec![42, 1, 0, 1, 2]);
        assert_eq!(replace(&items, &0, &42, 2), vec![42, 1, 42, 1, 2]);
        assert_eq!(replace(&items, &0, &42, -1), vec![42, 1, 42, 1, 2]);
        assert_eq!(replace(&items, &7, &42, -1), vec![0, 1, 0, 1, 2]);
        assert_eq!(replace_all(&items, &1, &9), vec![0, 9, 0, 9, 2]);
    }

    #[test]
    fn test_insert_at_clamps_index() {
        assert_eq!(insert_at(vec![1, 4], 1, vec![2, 3]), vec![1, 2, 3, 4]);
        assert_eq!(insert_at(vec![2, 3], -5, vec![1]), vec![1, 2, 3]);
        assert_eq!(insert_at(vec![1, 2], 99, vec![3]), vec![1, 2, 3]);
        assert_eq!(insert_at(Vec::<i32>::new(), 0, vec![1]), vec![1]);
    }

    #[test]
    fn test_drop_right() {
        assert_eq!(drop_right(vec![1, 2, 3], 1), vec![1, 2]);
        assert_eq!(drop_right(vec![1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(drop_right(vec![1, 2, 3], 10), Vec::<i32>::new());
    }
}
