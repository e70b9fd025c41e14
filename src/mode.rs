//! Most frequent values of a sequence, counted with a [`ChainingMap`]

use crate::ChainingMap;

/// Returns the value(s) occurring most often in `values` and how often that is.
///
/// Counts are kept in a fresh default [`ChainingMap`]. Tied values come back in the map's
/// iteration order (bucket by bucket, most recently inserted first within a bucket), not in
/// the order they first appear in the input. The frequency starts at 1, so an empty input
/// yields no values and a frequency of 1.
///
/// ```rust
/// use bucketry::find_mode;
///
/// let (mode, frequency) = find_mode(&["a", "b", "a", "c", "a", "b"]);
/// assert_eq!(mode, vec!["a".to_string()]);
/// assert_eq!(frequency, 3);
/// ```
#[must_use]
pub fn find_mode<S: AsRef<str>>(values: &[S]) -> (Vec<String>, usize) {
    let mut counts: ChainingMap<usize> = ChainingMap::default();
    let mut max_frequency = 1;

    for value in values {
        let value = value.as_ref();
        let count = counts.get(value).copied().unwrap_or(0_usize).saturating_add(1);
        counts.put(value.to_owned(), count);
        max_frequency = max_frequency.max(count);
    }

    let mode = counts
        .iter()
        .filter(|&(_, &count)| count == max_frequency)
        .map(|(value, _)| value.to_owned())
        .collect();

    (mode, max_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// Builds owned strings from string literals
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_mode() {
        assert_eq!(find_mode(&["a", "b", "a", "c", "a", "b"]), (strings(&["a"]), 3));
    }

    #[test]
    fn test_ties_follow_bucket_order() {
        // "y" lands in bucket 0 and "x" in bucket 10 of the default 11-bucket map
        assert_eq!(find_mode(&["x", "y"]), (strings(&["y", "x"]), 1));
        // melon hashes to bucket 0, apple to bucket 2
        assert_eq!(
            find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]),
            (strings(&["melon", "apple"]), 2)
        );
    }

    #[test]
    fn test_ties_in_same_bucket_are_newest_first() {
        // "three" and "five" both land in bucket 8; "five" was inserted later
        assert_eq!(
            find_mode(&["one", "two", "three", "four", "five"]),
            (strings(&["one", "four", "two", "five", "three"]), 1)
        );
    }

    #[test]
    fn test_mode_with_owned_strings() {
        let input = strings(&[
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
            "Ubuntu",
        ]);
        assert_eq!(find_mode(&input), (strings(&["Ubuntu"]), 4));
    }

    #[test]
    fn test_empty_input() {
        let input: [&str; 0] = [];
        assert_eq!(find_mode(&input), (Vec::new(), 1));
    }

    proptest! {
        #[test]
        fn prop_mode_matches_counts(values in prop::collection::vec("[a-e]{1,2}", 1..80)) {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for value in &values {
                *counts.entry(value.as_str()).or_default() += 1;
            }
            let max = counts.values().copied().max().unwrap_or(0);

            let (mode, frequency) = find_mode(&values);
            prop_assert_eq!(frequency, max);

            let mut expected: Vec<String> = counts
                .iter()
                .filter(|&(_, &count)| count == max)
                .map(|(value, _)| (*value).to_string())
                .collect();
            let mut actual = mode;
            expected.sort();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }
    }
}
