use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::Entry;

/// Returns every key of the map. Order is unspecified.
///
/// ```
/// use std::collections::HashMap;
/// use kitbag::map::keys;
///
/// let kv = HashMap::from([("foo", 1), ("bar", 2)]);
/// let mut result = keys(&kv);
/// result.sort_unstable();
/// assert_eq!(result, vec!["bar", "foo"]);
/// ```
pub fn keys<K: Clone, V>(object: &HashMap<K, V>) -> Vec<K> {
    object.keys().cloned().collect()
}

/// Returns every value of the map. Order is unspecified.
pub fn values<K, V: Clone>(object: &HashMap<K, V>) -> Vec<V> {
    object.values().cloned().collect()
}

/// Returns the value for `key`, or `fallback` when the key is absent.
///
/// ```
/// use std::collections::HashMap;
/// use kitbag::map::value_or;
///
/// let kv = HashMap::from([("foo", 1)]);
/// assert_eq!(value_or(&kv, &"foo", 42), 1);
/// assert_eq!(value_or(&kv, &"baz", 42), 42);
/// ```
pub fn value_or<K: Eq + Hash, V: Clone>(object: &HashMap<K, V>, key: &K, fallback: V) -> V {
    object.get(key).cloned().unwrap_or(fallback)
}

/// Keeps the entries for which the predicate returns true.
pub fn pick_by<K: Clone + Eq + Hash, V: Clone>(
    object: &HashMap<K, V>,
    predicate: impl Fn(&K, &V) -> bool,
) -> HashMap<K, V> {
    object
        .iter()
        .filter(|&(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Keeps the entries whose key is listed in `keys`.
pub fn pick_by_keys<K: Clone + Eq + Hash, V: Clone>(
    object: &HashMap<K, V>,
    keys: &[K],
) -> HashMap<K, V> {
    keys.iter()
        .filter_map(|k| object.get(k).map(|v| (k.clone(), v.clone())))
        .collect()
}

/// Keeps the entries whose value is listed in `values`.
pub fn pick_by_values<K: Clone + Eq + Hash, V: Clone + Eq + Hash>(
    object: &HashMap<K, V>,
    values: &[V],
) -> HashMap<K, V> {
    let seen: HashSet<&V> = values.iter().collect();

    object
        .iter()
        .filter(|(_, v)| seen.contains(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Drops the entries for which the predicate returns true.
pub fn omit_by<K: Clone + Eq + Hash, V: Clone>(
    object: &HashMap<K, V>,
    predicate: impl Fn(&K, &V) -> bool,
) -> HashMap<K, V> {
    object
        .iter()
        .filter(|&(k, v)| !predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Drops the entries whose key is listed in `keys`.
pub fn omit_by_keys<K: Clone + Eq + Hash, V: Clone>(
    object: &HashMap<K, V>,
    keys: &[K],
) -> HashMap<K, V> {
    let seen: HashSet<&K> = keys.iter().collect();

    object
        .iter()
        .filter(|(k, _)| !seen.contains(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Drops the entries whose value is listed in `values`.
pub fn omit_by_values<K: Clone + Eq + Hash, V: Clone + Eq + Hash>(
    object: &HashMap<K, V>,
    values: &[V],
) -> HashMap<K, V> {
    let seen: HashSet<&V> = values.iter().collect();

    object
        .iter()
        .filter(|(_, v)| !seen.contains(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Turns the map into a sequence of key-value pairs. Order is unspecified.
pub fn entries<K: Clone, V: Clone>(object: &HashMap<K, V>) -> Vec<Entry<K, V>> {
    object
        .iter()
        .map(|(k, v)| Entry::new(k.clone(), v.clone()))
        .collect()
}

/// Builds a map from a sequence of key-value pairs. Later pairs overwrite
/// earlier ones on key collision.
pub fn from_entries<K: Eq + Hash, V>(entries: Vec<Entry<K, V>>) -> HashMap<K, V> {
    entries.into_iter().map(|e| (e.key, e.value)).collect()
}

/// Swaps keys and values. When values repeat, which key survives is
/// unspecified.
pub fn invert<K: Clone + Eq + Hash, V: Clone + Eq + Hash>(object: &HashMap<K, V>) -> HashMap<V, K> {
    object
        .iter()
        .map(|(k, v)| (v.clone(), k.clone()))
        .collect()
}

/// Merges the maps left to right; later maps overwrite earlier keys.
///
/// ```
/// use std::collections::HashMap;
/// use kitbag::map::assign;
///
/// let merged = assign(&[
///     HashMap::from([("a", 1), ("b", 2)]),
///     HashMap::from([("b", 3), ("c", 4)]),
/// ]);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn assign<K: Clone + Eq + Hash, V: Clone>(maps: &[HashMap<K, V>]) -> HashMap<K, V> {
    let mut result = HashMap::new();

    for map in maps {
        for (k, v) in map {
            result.insert(k.clone(), v.clone());
        }
    }

    result
}

/// Turns the map into a sequence via `iteratee`. Order is unspecified.
pub fn map_to_slice<K, V, R>(object: &HashMap<K, V>, iteratee: impl Fn(&K, &V) -> R) -> Vec<R> {
    object.iter().map(|(k, v)| iteratee(k, v)).collect()
}
