//! List helpers
//!
//! Splitting, deduplication and row-to-record conversion for the string
//! lists that come out of form fields and query results.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Result, UtilkitError};

/// Split on `,` and `;`, dropping empty fields.
pub fn split(s: &str) -> Vec<String> {
    split_on(s, &[',', ';'])
}

/// Split on `|`, dropping empty fields.
pub fn split_by_pipe(s: &str) -> Vec<String> {
    split_on(s, &['|'])
}

fn split_on(s: &str, delimiters: &[char]) -> Vec<String> {
    s.split(|c: char| delimiters.contains(&c))
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Zip every row with the column names into a record.
///
/// Works for plain string cells as well as dynamic ones such as
/// `serde_json::Value`.
///
/// # Errors
/// [`UtilkitError::LengthMismatch`] for the first row whose length differs
/// from `col_names`.
pub fn slice_to_map<V: Clone>(
    col_names: &[String],
    rows: &[Vec<V>],
) -> Result<Vec<HashMap<String, V>>> {
    let columns = col_names.len();

    rows.iter()
        .enumerate()
        .map(|(row, cells)| -> Result<HashMap<String, V>> {
            if cells.len() != columns {
                return Err(UtilkitError::LengthMismatch {
                    row,
                    columns,
                    found: cells.len(),
                });
            }
            Ok(col_names.iter().cloned().zip(cells.iter().cloned()).collect())
        })
        .collect()
}

pub fn contains_str<S: AsRef<str>>(needle: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == needle)
}

/// Remove the first occurrence of `value`; later duplicates are kept.
pub fn remove_str(mut list: Vec<String>, value: &str) -> Vec<String> {
    if let Some(idx) = list.iter().position(|item| item == value) {
        list.remove(idx);
    }
    list
}

/// Order-preserving dedupe: the first occurrence of each value wins.
pub fn unique<T: Eq + Hash + Clone>(input: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(input.len());
    input
        .iter()
        .filter(|val| seen.insert(*val))
        .cloned()
        .collect()
}

/// Trim every entry and drop the ones left empty.
pub fn remove_blank_strings<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    input
        .iter()
        .map(|val| val.as_ref().trim())
        .filter(|val| !val.is_empty())
        .map(str::to_string)
        .collect()
}

/// [`remove_blank_strings`] followed by [`unique`].
pub fn unique_trimmed<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    unique(&remove_blank_strings(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_on_comma_and_semicolon() {
        assert_eq!(split("a,b;c,,;d"), strings(&["a", "b", "c", "d"]));
        assert!(split("").is_empty());
        assert!(split(",;,").is_empty());
    }

    #[test]
    fn test_split_keeps_whitespace() {
        assert_eq!(split(" a , b"), strings(&[" a ", " b"]));
    }

    #[test]
    fn test_split_by_pipe() {
        assert_eq!(split_by_pipe("x|y||z|"), strings(&["x", "y", "z"]));
        assert_eq!(split_by_pipe("a,b"), strings(&["a,b"]));
    }

    #[test]
    fn test_slice_to_map() {
        let cols = strings(&["id", "name"]);
        let rows = vec![strings(&["1", "alice"]), strings(&["2", "bob"])];
        let records = slice_to_map(&cols, &rows).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[1]["name"], "bob");
    }

    #[test]
    fn test_slice_to_map_empty_rows() {
        let cols = strings(&["id"]);
        let rows: Vec<Vec<String>> = Vec::new();
        assert!(slice_to_map(&cols, &rows).unwrap().is_empty());
    }

    #[test]
    fn test_slice_to_map_length_mismatch() {
        let cols = strings(&["id", "name"]);
        let rows = vec![strings(&["1", "alice"]), strings(&["2"])];
        match slice_to_map(&cols, &rows) {
            Err(UtilkitError::LengthMismatch { row, columns, found }) => {
                assert_eq!((row, columns, found), (1, 2, 1));
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_slice_to_map_dynamic_values() {
        let cols = strings(&["id", "active"]);
        let rows = vec![vec![serde_json::json!(7), serde_json::json!(true)]];
        let records = slice_to_map(&cols, &rows).unwrap();
        assert_eq!(records[0]["id"], serde_json::json!(7));
        assert_eq!(records[0]["active"], serde_json::json!(true));
    }

    #[test]
    fn test_contains_str() {
        let list = strings(&["yes", "no"]);
        assert!(contains_str("no", &list));
        assert!(!contains_str("maybe", &list));
        assert!(!contains_str("", &Vec::<String>::new()));
    }

    #[test]
    fn test_remove_str_first_occurrence_only() {
        let list = strings(&["a", "b", "a"]);
        assert_eq!(remove_str(list, "a"), strings(&["b", "a"]));
        assert_eq!(remove_str(strings(&["a"]), "z"), strings(&["a"]));
    }

    #[test]
    fn test_unique_preserves_order() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(unique(&strings(&["b", "a", "b"])), strings(&["b", "a"]));
    }

    #[test]
    fn test_remove_blank_strings_trims() {
        assert_eq!(
            remove_blank_strings(&["  a ", "", "   ", "b"]),
            strings(&["a", "b"])
        );
    }

    #[test]
    fn test_unique_trimmed() {
        assert_eq!(
            unique_trimmed(&[" a", "a ", "", "b", "  "]),
            strings(&["a", "b"])
        );
    }
}
