use num_traits::{Float, FromPrimitive, Num, Signed};

use crate::condition::ternary;

/// Absolute value.
pub fn abs<T: Signed>(value: T) -> T {
    value.abs()
}

/// Sums the collection. An empty collection sums to zero.
pub fn sum<T: Num + Copy>(collection: &[T]) -> T {
    collection.iter().fold(T::zero(), |acc, &item| acc + item)
}

/// Sums the values produced by `iteratee`.
pub fn sum_by<T, R: Num + Copy>(collection: &[T], iteratee: impl Fn(&T) -> R) -> R {
    collection
        .iter()
        .fold(R::zero(), |acc, item| acc + iteratee(item))
}

/// Averages the collection. An empty collection averages to zero.
pub fn average<T: Num + Copy + FromPrimitive>(collection: &[T]) -> T {
    match T::from_usize(collection.len()) {
        Some(len) if !collection.is_empty() => sum(collection) / len,
        _ => T::zero(),
    }
}

/// Averages the values produced by `iteratee`.
pub fn average_by<T, U: Num + Copy + FromPrimitive>(
    collection: &[T],
    iteratee: impl Fn(&T) -> U,
) -> U {
    match U::from_usize(collection.len()) {
        Some(len) if !collection.is_empty() => sum_by(collection, iteratee) / len,
        _ => U::zero(),
    }
}

/// Clamps `value` into the closed interval `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns the smallest element, or `None` for an empty collection.
pub fn min<T: PartialOrd + Copy>(collection: &[T]) -> Option<T> {
    let mut iter = collection.iter();
    let mut min = *iter.next()?;

    for &item in iter {
        min = ternary(item < min, item, min);
    }

    Some(min)
}

/// Returns the smallest element under the comparison, which must return true
/// when its first argument is smaller. Ties keep the earliest element.
pub fn min_by<T: Clone>(collection: &[T], comparison: impl Fn(&T, &T) -> bool) -> Option<T> {
    let mut iter = collection.iter();
    let mut min = iter.next()?.clone();

    for item in iter {
        if comparison(item, &min) {
            min = item.clone();
        }
    }

    Some(min)
}

/// Returns the largest element, or `None` for an empty collection.
pub fn max<T: PartialOrd + Copy>(collection: &[T]) -> Option<T> {
    let mut iter = collection.iter();
    let mut max = *iter.next()?;

    for &item in iter {
        max = ternary(item > max, item, max);
    }

    Some(max)
}

/// Returns the largest element under the comparison, which must return true
/// when its first argument is larger. Ties keep the earliest element.
pub fn max_by<T: Clone>(collection: &[T], comparison: impl Fn(&T, &T) -> bool) -> Option<T> {
    let mut iter = collection.iter();
    let mut max = iter.next()?.clone();

    for item in iter {
        if comparison(item, &max) {
            max = item.clone();
        }
    }

    Some(max)
}

/// Returns `[0, num)` counting up, or down towards `num` when it is negative.
pub fn range(num: i64) -> Vec<i64> {
    let length = num.unsigned_abs() as usize;
    let step = ternary(num < 0, -1, 1);

    (0..length).map(|i| i as i64 * step).collect()
}

/// Returns `count` consecutive values starting at `start`, stepping by one.
/// A negative count steps downward (meaningless for unsigned element types).
pub fn range_from<T: Num + Copy>(start: T, count: i64) -> Vec<T> {
    let length = count.unsigned_abs() as usize;
    let mut result = Vec::with_capacity(length);
    let mut current = start;

    for _ in 0..length {
        result.push(current);
        current = if count < 0 {
            current - T::one()
        } else {
            current + T::one()
        };
    }

    result
}

/// Returns the values from `start` towards `end` (exclusive) in increments of
/// `step`. A zero step or a step pointing away from `end` yields nothing.
pub fn range_with_steps<T: Num + PartialOrd + Copy>(start: T, end: T, step: T) -> Vec<T> {
    let mut result = Vec::new();

    if start == end || step == T::zero() {
        return result;
    }

    if start < end {
        if step < T::zero() {
            return result;
        }

        let mut i = start;
        while i < end {
            result.push(i);
            i = i + step;
        }
        return result;
    }

    if step > T::zero() {
        return result;
    }

    let mut i = start;
    while i > end {
        result.push(i);
        i = i + step;
    }

    result
}

/// Rounds to `precision` decimal places; a negative precision rounds to the
/// left of the decimal point. Arithmetic happens in f64 regardless of `T`.
pub fn round<T: Float>(value: T, precision: i32) -> T {
    let ratio = 10f64.powi(precision);

    let Some(v) = value.to_f64() else {
        return value;
    };

    T::from((v * ratio).round() / ratio).unwrap_or(value)
}
