//! Lexical path helpers.
use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// Symlinks are not resolved, so `a/link/..` becomes `a`. A `..` that would
/// climb above the start of a relative path is kept; one at the root of an
/// absolute path is dropped. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use joshua_bundle::paths::normalize;
///
/// assert_eq!(normalize(Path::new("./lm.kenlm")), PathBuf::from("lm.kenlm"));
/// assert_eq!(normalize(Path::new("/data/tune/../lm/./x.gz")), PathBuf::from("/data/lm/x.gz"));
/// assert_eq!(normalize(Path::new("../model")), PathBuf::from("../model"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}

/// Make `path` absolute against the current directory, then normalize it.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path).map(|p| normalize(&p))
}
