//! Reading and rewriting decoder configuration (`joshua.config`) text.
pub mod comments;
pub mod filter;
pub mod line;

/// Name of the rewritten configuration file inside a bundle.
pub const OUTPUT_CONFIG_FILE_NAME: &str = "joshua.config";

/// Split configuration text into lines on `\n`.
///
/// A single trailing newline terminates the last line rather than starting
/// an empty one, so writing the lines back with a final `\n` reproduces the
/// input. Any `\r` is kept as part of its line.
///
/// # Examples
///
/// ```
/// use joshua_bundle::config::split_lines;
///
/// assert_eq!(split_lines("a\nb\n"), ["a", "b"]);
/// assert_eq!(split_lines("a\n\n"), ["a", ""]);
/// assert_eq!(split_lines("a"), ["a"]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_lines(""), [""]);
    }

    #[test]
    fn carriage_returns_are_preserved() {
        assert_eq!(split_lines("a\r\nb\r\n"), ["a\r", "b\r"]);
    }

    #[test]
    fn inner_blank_lines_survive() {
        assert_eq!(split_lines("a\n\n\nb\n"), ["a", "", "", "b"]);
    }
}
