//! Line-level grammar of `joshua.config`.
//!
//! A line is a *config portion* optionally followed by `#` and a comment.
//! Only the config portion is ever inspected for paths.

use crate::error::LineError;

/// Leading tokens that declare a grammar or language model file.
pub const FILE_TYPE_TOKENS: [&str; 2] = ["lm", "tm"];

/// Options whose value is a path, in lookup priority order.
pub const FILE_TYPE_OPTIONS: [&str; 2] = ["-path", "-lm_file"];

const COMMENT_MARKER: char = '#';

/// A configuration line split at its first comment marker.
///
/// # Examples
///
/// ```
/// use joshua_bundle::config::line::LineParts;
///
/// let parts = LineParts::split("lm = kenlm 5 lm.kenlm # big one");
/// assert_eq!(parts.config, "lm = kenlm 5 lm.kenlm ");
/// assert_eq!(parts.comment, Some(" big one"));
/// assert_eq!(parts.join(), "lm = kenlm 5 lm.kenlm # big one");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Text before the comment marker.
    pub config: &'a str,
    /// Text after the comment marker, if the line had one.
    pub comment: Option<&'a str>,
}

impl<'a> LineParts<'a> {
    /// Split `line` at the first `#`.
    #[must_use]
    pub fn split(line: &'a str) -> Self {
        match line.split_once(COMMENT_MARKER) {
            Some((config, comment)) => Self {
                config,
                comment: Some(comment),
            },
            None => Self {
                config: line,
                comment: None,
            },
        }
    }

    /// Rejoin the parts, restoring the marker when a comment was present.
    #[must_use]
    pub fn join(&self) -> String {
        with_comment(self.config, self.comment)
    }
}

/// Append `#comment` to `config` when `comment` is present.
#[must_use]
pub fn with_comment(config: &str, comment: Option<&str>) -> String {
    comment.map_or_else(
        || config.to_string(),
        |comment| format!("{config}{COMMENT_MARKER}{comment}"),
    )
}

/// Return `true` if the line references a file or directory path.
///
/// The check is an allow-list: the first token must be one of
/// [`FILE_TYPE_TOKENS`], or some token must be one of [`FILE_TYPE_OPTIONS`].
/// Anything else, including comment-only and blank lines, is not a path line.
///
/// # Examples
///
/// ```
/// use joshua_bundle::config::line::line_specifies_path;
///
/// assert!(line_specifies_path("tm = thrax glue -1 /data/tune/grammar.glue"));
/// assert!(line_specifies_path(
///     "feature-function = StateMinimizingLanguageModel -lm_type kenlm -lm_order 5 -lm_file lm.kenlm"
/// ));
/// assert!(!line_specifies_path("feature-function = WordPenalty"));
/// assert!(!line_specifies_path("# tm = commented out"));
/// ```
#[must_use]
pub fn line_specifies_path(line: &str) -> bool {
    let parts = LineParts::split(line);
    let tokens: Vec<&str> = parts.config.split_whitespace().collect();

    match tokens.first() {
        None => false,
        Some(first) if FILE_TYPE_TOKENS.contains(first) => true,
        Some(_) => tokens.iter().any(|t| FILE_TYPE_OPTIONS.contains(t)),
    }
}

/// Return the path token named by a path-bearing config portion.
///
/// The value of the first option in [`FILE_TYPE_OPTIONS`] (by priority, not by
/// position in the line) wins; without such an option the last token is the
/// path.
///
/// # Errors
///
/// Returns [`LineError::MissingPathToken`] if the option is the last token or
/// the config portion is empty.
///
/// # Examples
///
/// ```
/// use joshua_bundle::config::line::parse_path;
///
/// let line = "tm = moses -owner pt -maxspan 0 -path phrase-table.packed -max-source-len 5";
/// assert_eq!(parse_path(line).unwrap(), "phrase-table.packed");
/// assert_eq!(parse_path("tm = moses pt 0 phrase-table.packed").unwrap(), "phrase-table.packed");
/// ```
pub fn parse_path(config: &str) -> Result<&str, LineError> {
    let tokens: Vec<&str> = config.split_whitespace().collect();

    for option in FILE_TYPE_OPTIONS {
        if let Some(index) = tokens.iter().position(|t| *t == option) {
            return tokens
                .get(index + 1)
                .copied()
                .ok_or_else(|| LineError::MissingPathToken {
                    option: option.to_string(),
                    line: config.trim_end().to_string(),
                });
        }
    }

    tokens
        .last()
        .copied()
        .ok_or_else(|| LineError::MissingPathToken {
            option: "<positional>".to_string(),
            line: config.to_string(),
        })
}
