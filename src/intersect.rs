use std::collections::HashSet;
use std::hash::Hash;

/// Returns true when `element` is present in the collection.
pub fn contains<T: PartialEq>(collection: &[T], element: &T) -> bool {
    collection.iter().any(|item| item == element)
}

/// Returns true when some element satisfies the predicate.
pub fn contains_by<T>(collection: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    collection.iter().any(|item| predicate(item))
}

/// Returns true when every element of `subset` is present in `collection`.
/// An empty subset is always covered.
pub fn every<T: Eq + Hash>(collection: &[T], subset: &[T]) -> bool {
    let contain: HashSet<&T> = collection.iter().collect();
    subset.iter().all(|item| contain.contains(item))
}

/// Returns true when the predicate holds for every element (or the
/// collection is empty).
pub fn every_by<T>(collection: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    collection.iter().all(|item| predicate(item))
}

/// Returns true when at least one element of `subset` is present in
/// `collection`. An empty subset matches nothing.
pub fn some<T: Eq + Hash>(collection: &[T], subset: &[T]) -> bool {
    let contain: HashSet<&T> = collection.iter().collect();
    subset.iter().any(|item| contain.contains(item))
}

/// Returns true when the predicate holds for at least one element.
pub fn some_by<T>(collection: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    collection.iter().any(|item| predicate(item))
}

/// Returns true when no element of `subset` is present in `collection`.
pub fn none<T: Eq + Hash>(collection: &[T], subset: &[T]) -> bool {
    !some(collection, subset)
}

/// Returns true when the predicate holds for no element.
pub fn none_by<T>(collection: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    !collection.iter().any(|item| predicate(item))
}

/// Returns the elements of `list2` that are also present in `list1`,
/// in `list2` order.
pub fn intersect<T: Clone + Eq + Hash>(list1: &[T], list2: &[T]) -> Vec<T> {
    let seen: HashSet<&T> = list1.iter().collect();

    list2
        .iter()
        .filter(|item| seen.contains(*item))
        .cloned()
        .collect()
}

/// Returns the two one-sided differences: elements of `list1` absent from
/// `list2`, then elements of `list2` absent from `list1`.
pub fn difference<T: Clone + Eq + Hash>(list1: &[T], list2: &[T]) -> (Vec<T>, Vec<T>) {
    let left_seen: HashSet<&T> = list1.iter().collect();
    let right_seen: HashSet<&T> = list2.iter().collect();

    let left = list1
        .iter()
        .filter(|item| !right_seen.contains(*item))
        .cloned()
        .collect();
    let right = list2
        .iter()
        .filter(|item| !left_seen.contains(*item))
        .cloned()
        .collect();

    (left, right)
}

/// Returns all distinct elements across the given lists, keeping the order
/// in which they first appear.
pub fn union<T: Clone + Eq + Hash>(lists: &[&[T]]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for list in lists {
        for item in *list {
            if seen.insert(item.clone()) {
                result.push(item.clone());
            }
        }
    }

    result
}

/// Returns the collection minus every element listed in `exclude`.
pub fn without<T: Clone + Eq + Hash>(collection: &[T], exclude: &[T]) -> Vec<T> {
    let seen: HashSet<&T> = exclude.iter().collect();

    collection
        .iter()
        .filter(|item| !seen.contains(*item))
        .cloned()
        .collect()
}

/// Returns the collection minus every element equal to the type's default
/// value (the "zero" of the type).
pub fn without_empty<T: Clone + Default + PartialEq>(collection: &[T]) -> Vec<T> {
    let empty = T::default();

    collection
        .iter()
        .filter(|item| **item != empty)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains(&[0, 1, 2], &1));
        assert!(!contains(&[0, 1, 2], &3));
        assert!(contains_by(&["a", "bb"], |s| s.len() == 2));
        assert!(!contains_by(&["a", "bb"], |s| s.len() == 3));
    }

    #[test]
    fn test_every() {
        assert!(every(&[0, 1, 2, 3], &[0, 2]));
        assert!(!every(&[0, 1, 2, 3], &[0, 4]));
        assert!(every(&[0, 1], &[]));

        assert!(every_by(&[2, 4], |&x| x % 2 == 0));
        assert!(!every_by(&[2, 3], |&x| x % 2 == 0));

        let empty: [i32; 0] = [];
        assert!(every_by(&empty, |_| false));
    }

    #[test]
    fn test_some() {
        assert!(some(&[0, 1, 2], &[9, 1]));
        assert!(!some(&[0, 1, 2], &[9, 8]));
        assert!(!some(&[0, 1, 2], &[]));

        assert!(some_by(&[1, 2], |&x| x % 2 == 0));
        assert!(!some_by(&[1, 3], |&x| x % 2 == 0));
    }

    #[test]
    fn test_none() {
        assert!(none(&[0, 1, 2], &[9, 8]));
        assert!(!none(&[0, 1, 2], &[9, 1]));
        assert!(none(&[0, 1, 2], &[]));

        assert!(none_by(&[1, 3], |&x| x % 2 == 0));
        assert!(!none_by(&[1, 2], |&x| x % 2 == 0));

        let empty: [i32; 0] = [];
        assert!(none_by(&empty, |_| true));
    }

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[0, 1, 2, 3], &[5, 3, 1]), vec![3, 1]);
        assert_eq!(intersect(&[0, 1], &[2, 3]), Vec::<i32>::new());
    }

    #[test]
    fn test_difference() {
        let (left, right) = difference(&[0, 1, 2, 3], &[2, 3, 4, 5]);
        assert_eq!(left, vec![0, 1]);
        assert_eq!(right, vec![4, 5]);

        let (left, right) = difference(&[1, 2], &[1, 2]);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn test_union() {
        let result = union(&[&[0, 1, 2][..], &[2, 3][..], &[3, 4][..]]);
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
        assert_eq!(union::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_without() {
        assert_eq!(without(&[0, 1, 2, 3], &[1, 3]), vec![0, 2]);
        assert_eq!(without(&[0, 1], &[]), vec![0, 1]);
    }

    #[test]
    fn test_without_empty() {
        assert_eq!(without_empty(&[0, 1, 0, 2]), vec![1, 2]);
        assert_eq!(
            without_empty(&["".to_string(), "a".to_string()]),
            vec!["a".to_string()]
        );
    }
}
