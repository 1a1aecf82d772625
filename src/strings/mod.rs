//! Case conversion over identifier-like strings.
//!
//! `camel_case`, `snake_case` and `upper_snake_case` share the word
//! segmenter in [`segment`]; `capitalize` and `reverse` work on the whole
//! string. All five are total: any input, including empty or symbol-only
//! strings, produces a defined output.

mod segment;

use segment::split_to_words;

/// Converts a string to lower camelCase.
pub fn camel_case(s: &str) -> String {
    let words = split_to_words(s, false);
    let mut result = String::with_capacity(s.len());

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }

    result
}

/// Upper-cases the first character and lower-cases the rest. The string is
/// treated as one unit, not segmented into words.
pub fn capitalize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Converts a string to snake_case.
pub fn snake_case(s: &str) -> String {
    split_to_words(s, false).join("_")
}

/// Converts a string to UPPER_SNAKE_CASE.
pub fn upper_snake_case(s: &str) -> String {
    split_to_words(s, true).join("_")
}

/// Reverses a string character-wise.
pub fn reverse(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    crate::slice::reverse(&mut chars);
    chars.into_iter().collect()
}
