//! String literal quoting for generated Starlark.

/// Quotes `text` as a double-quoted Starlark string literal.
///
/// Handles:
/// - Backslashes: `\` -> `\\`
/// - Double quotes: `"` -> `\"`
/// - Newlines, carriage returns and tabs as their escape sequences
///
/// # Examples
///
/// ```
/// use crosstool_starlark::starlark::quote;
///
/// assert_eq!(quote("a/b/c"), "\"a/b/c\"");
/// assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}
