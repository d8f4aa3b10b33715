//! Comment and blank-line stripping for `--no-comments`.
//!
//! Runs over the already-rewritten lines, after every path has been
//! relocated, so it never affects which files end up in the bundle.

use super::line::LineParts;

/// Remove comments and collapse runs of blank lines.
///
/// - the comment portion of every line is dropped, along with whitespace
///   left dangling before the marker;
/// - lines that held nothing but a comment are removed entirely;
/// - consecutive blank lines collapse into one, and leading blank lines go.
///
/// # Examples
///
/// ```
/// use joshua_bundle::config::comments::strip_comments;
///
/// let lines = ["# header", "", "", "top-n = 1  # best only", "", "", "mark-oovs = false"];
/// let stripped = strip_comments(lines.iter().map(ToString::to_string));
/// assert_eq!(stripped, ["top-n = 1", "", "mark-oovs = false"]);
/// ```
pub fn strip_comments<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();

    for line in lines {
        let parts = LineParts::split(&line);
        let kept = if parts.comment.is_some() {
            let config = parts.config.trim_end();
            if config.trim().is_empty() {
                continue;
            }
            config.to_string()
        } else {
            line.clone()
        };

        let blank = kept.trim().is_empty();
        let previous_blank = out.last().is_none_or(|l| l.trim().is_empty());
        if blank && previous_blank {
            continue;
        }
        out.push(kept);
    }

    out
}
