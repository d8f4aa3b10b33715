//! File-system resource helpers.
use anyhow::{Context as _, Result};
use std::fs::{File, FileTimes};
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Recursively copy a directory tree to a destination that must not exist.
///
/// Symlinks inside the source tree are recreated as symlinks with the same
/// target rather than followed. Regular files keep their permission bits and
/// timestamps. Each copied directory takes the permissions and timestamps of
/// its source once its children are in place.
///
/// # Errors
///
/// Returns an error if the destination already exists, a source entry cannot
/// be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir(dst).with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in
        std::fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("reading file type of {}", src_path.display()))?;

        if file_type.is_symlink() {
            let target = std::fs::read_link(&src_path)
                .with_context(|| format!("reading link {}", src_path.display()))?;
            create_symlink(&target, &dst_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    let permissions = std::fs::metadata(src)
        .with_context(|| format!("reading metadata of {}", src.display()))?
        .permissions();
    std::fs::set_permissions(dst, permissions)
        .with_context(|| format!("set permissions: {}", dst.display()))?;
    copy_times(src, dst)
}

/// Copy one regular file, keeping its permission bits and timestamps.
///
/// # Errors
///
/// Returns an error if the file cannot be copied or its times cannot be set.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    std::fs::copy(src, dst)
        .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
    copy_times(src, dst)
}

/// Give `dst` the modification and access times of `src`.
///
/// # Errors
///
/// Returns an error if either path cannot be read or `dst` cannot be updated.
pub fn copy_times(src: &Path, dst: &Path) -> Result<()> {
    let metadata =
        std::fs::metadata(src).with_context(|| format!("reading metadata of {}", src.display()))?;
    let mut times = FileTimes::new().set_modified(
        metadata
            .modified()
            .with_context(|| format!("reading modification time of {}", src.display()))?,
    );
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_times(dst)
        .and_then(|file| file.set_times(times))
        .with_context(|| format!("set times: {}", dst.display()))
}

// A read-only handle is enough for the owner to update times, and it also
// opens directories and read-only copies.
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    File::open(path)
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt as _;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    const FILE_FLAG_BACKUP_SEMANTICS: u32 = 0x0200_0000;
    File::options()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
        .open(path)
}

/// Create a symlink at `link` pointing to `target`.
///
/// # Errors
///
/// Returns an error if the link cannot be created (for example because
/// `link` already exists).
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).with_context(|| {
            format!(
                "creating symlink {} -> {}",
                link.display(),
                target.display()
            )
        })?;
    }

    #[cfg(windows)]
    {
        let resolved = link.parent().map_or_else(|| target.to_path_buf(), |p| p.join(target));
        let result = if resolved.is_dir() {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        };
        result.with_context(|| {
            format!(
                "creating symlink {} -> {}",
                link.display(),
                target.display()
            )
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn copies_files_and_subdirectories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("config"), b"packed").unwrap();
        std::fs::create_dir(src.path().join("slice_00000")).unwrap();
        std::fs::write(src.path().join("slice_00000/source.data"), b"bbb").unwrap();

        let target = dst.path().join("grammar.packed");
        copy_dir_recursive(src.path(), &target).unwrap();

        assert_eq!(std::fs::read(target.join("config")).unwrap(), b"packed");
        assert_eq!(
            std::fs::read(target.join("slice_00000/source.data")).unwrap(),
            b"bbb"
        );
    }

    #[test]
    fn refuses_existing_destination() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        assert!(copy_dir_recursive(src.path(), dst.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_inside_tree_are_preserved() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("real.txt"), b"x").unwrap();
        std::os::unix::fs::symlink("real.txt", src.path().join("alias.txt")).unwrap();

        let target = dst.path().join("out");
        copy_dir_recursive(src.path(), &target).unwrap();

        let link = target.join("alias.txt");
        assert!(std::fs::symlink_metadata(&link).unwrap().is_symlink());
        assert_eq!(
            std::fs::read_link(&link).unwrap(),
            std::path::PathBuf::from("real.txt")
        );
        assert_eq!(std::fs::read(&link).unwrap(), b"x");
    }

    #[cfg(unix)]
    #[test]
    fn permission_bits_are_kept() {
        use std::os::unix::fs::PermissionsExt;

        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let script = src.path().join("run.sh");
        std::fs::write(&script, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o750)).unwrap();

        let target = dst.path().join("out");
        copy_dir_recursive(src.path(), &target).unwrap();

        let mode = std::fs::metadata(target.join("run.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[cfg(unix)]
    #[test]
    fn modification_times_are_kept() {
        use std::time::{Duration, SystemTime};

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let tree = src.path().join("grammar.packed");
        std::fs::create_dir_all(tree.join("slice_00000")).unwrap();
        let data = tree.join("slice_00000/source.data");
        std::fs::write(&data, b"bbb").unwrap();
        File::options()
            .write(true)
            .open(&data)
            .unwrap()
            .set_modified(stamp)
            .unwrap();
        File::open(tree.join("slice_00000"))
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        let target = dst.path().join("grammar.packed");
        copy_dir_recursive(&tree, &target).unwrap();

        let modified = |p: &Path| std::fs::metadata(p).unwrap().modified().unwrap();
        assert_eq!(modified(&target.join("slice_00000/source.data")), stamp);
        assert_eq!(modified(&target.join("slice_00000")), stamp);
        assert_eq!(modified(&target), modified(&tree));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("file.txt");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").exists());
    }

    #[test]
    fn ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new("joshua.config")).unwrap();
    }
}
