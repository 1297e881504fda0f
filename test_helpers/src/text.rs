//! Text comparison helpers for generated Starlark.

/// Converts `\r\n` line endings to `\n`.
#[must_use]
pub fn normalize_newlines(value: &str) -> String {
    value.replace("\r\n", "\n")
}

/// Describes the first line where `actual` and `expected` differ.
///
/// Returns `None` when the texts are equal after newline normalization.
#[must_use]
pub fn first_difference(actual: &str, expected: &str) -> Option<String> {
    let actual_text = normalize_newlines(actual);
    let expected_text = normalize_newlines(expected);
    if actual_text == expected_text {
        return None;
    }

    let mut actual_lines = actual_text.lines();
    let mut expected_lines = expected_text.lines();
    let mut line = 1;
    loop {
        match (actual_lines.next(), expected_lines.next()) {
            (Some(left), Some(right)) if left == right => line += 1,
            (left, right) => {
                return Some(format!(
                    "line {line}: expected {:?}, got {:?}",
                    right.unwrap_or("<end of text>"),
                    left.unwrap_or("<end of text>")
                ));
            }
        }
    }
}

/// Returns the lines of `value` starting with `prefix` after indentation.
#[must_use]
pub fn lines_starting_with<'a>(value: &'a str, prefix: &str) -> Vec<&'a str> {
    value
        .lines()
        .filter(|line| line.trim_start().starts_with(prefix))
        .collect()
}
