//! Identifier word segmentation.
//!
//! The splitter classifies each character, groups consecutive same-class
//! characters into runs, repairs `Upper`→`Lower` run boundaries (so
//! "FOOBar" reads as "FOO" + "Bar"), drops runs that do not start with a
//! letter or digit, and re-cases the survivors.

use crate::find::last;
use crate::slice::{drop_right, insert_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

/// ASCII range tests only; every other code point is `Other`.
fn classify(c: char) -> CharClass {
    match c {
        'a'..='z' => CharClass::Lower,
        'A'..='Z' => CharClass::Upper,
        '0'..='9' => CharClass::Digit,
        _ => CharClass::Other,
    }
}

fn starts_with_class(run: &[char], class: CharClass) -> bool {
    run.first().is_some_and(|&c| classify(c) == class)
}

/// Groups the input into maximal runs of a single character class.
/// Concatenating the runs reproduces the input exactly.
fn build_runs(s: &str) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    let mut last_class = None;

    for c in s.chars() {
        let class = classify(c);
        match runs.last_mut() {
            Some(run) if last_class == Some(class) => run.push(c),
            _ => runs.push(vec![c]),
        }
        last_class = Some(class);
    }

    runs
}

/// Moves the final character of each `Upper`-first run onto a directly
/// following `Lower`-first run. One pass over adjacent pairs; a run emptied
/// by the move contributes nothing downstream.
fn repair_boundaries(runs: &mut [Vec<char>]) {
    for i in 0..runs.len().saturating_sub(1) {
        if !starts_with_class(&runs[i], CharClass::Upper)
            || !starts_with_class(&runs[i + 1], CharClass::Lower)
        {
            continue;
        }

        if let Ok(&moved) = last(&runs[i]) {
            runs[i + 1] = insert_at(std::mem::take(&mut runs[i + 1]), 0, vec![moved]);
            runs[i] = drop_right(std::mem::take(&mut runs[i]), 1);
        }
    }
}

/// Splits the input into words and re-cases each to all-lower or all-upper
/// (ASCII case shifts only). Runs not starting with a letter or digit are
/// dropped whole.
pub(super) fn split_to_words(s: &str, upper_case: bool) -> Vec<String> {
    let mut runs = build_runs(s);
    repair_boundaries(&mut runs);

    runs.iter()
        .filter(|run| {
            run.first()
                .is_some_and(|&c| c.is_alphabetic() || classify(c) == CharClass::Digit)
        })
        .map(|run| {
            run.iter()
                .map(|&c| {
                    if upper_case {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect()
        })
        .collect()
}
