/// Choices for a plain yes/no select.
pub const YES_NO_OPTIONS: [&str; 2] = ["yes", "no"];

/// Turn a list of values into `(value, label)` pairs where both halves are
/// the item itself, which is what select widgets expect.
pub fn as_options<S: AsRef<str>>(list: &[S]) -> Vec<(String, String)> {
    list.iter()
        .map(|item| (item.as_ref().to_string(), item.as_ref().to_string()))
        .collect()
}
