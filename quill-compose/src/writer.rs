//! Atomic document writer.
//!
//! ## Write protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Ensure the parent directory exists.
//! 3. Write to `<path>.quill.tmp`.
//! 4. Rename to the final path (atomic on POSIX); on failure remove the tmp
//!    file and leave the original intact.

use std::path::{Path, PathBuf};

use crate::error::{io_err, ComposeError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    /// Path the result refers to.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// Atomically write a single rendered document.
pub(crate) fn write_doc(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, ComposeError> {
    let tmp = PathBuf::from(format!("{}.quill.tmp", path.display()));
    write_doc_with_tmp(path, content, dry_run, &tmp)
}

fn write_doc_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, ComposeError> {
    // Normalise line endings to LF before writing; identical inputs must
    // produce byte-identical files across platforms.
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_creates_file_with_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        let result = write_doc(&path, "# hello", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# hello");
    }

    #[test]
    fn write_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".github").join("SECURITY.md");
        write_doc(&path, "content", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        write_doc(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.quill.tmp", path.display()));
        assert!(!tmp_path.exists(), ".quill.tmp must be cleaned up");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        let result = write_doc(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn crlf_is_normalised_to_lf_on_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        write_doc(&path, "line1\r\nline2\r\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    fn rewrite_with_identical_content_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        write_doc(&path, "stable output\n", false).unwrap();
        let first = fs::read(&path).unwrap();
        write_doc(&path, "stable output\n", false).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("README.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("README.md.quill.tmp");

        let err = write_doc_with_tmp(&path, "new content", false, &tmp_path)
            .expect_err("rename should fail on readonly dir");
        let _ = err;

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!tmp_path.exists(), ".quill.tmp should be cleaned up");

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();
    }
}
