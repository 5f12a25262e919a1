//! [`TestRepo`] builder for descriptor test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::git;

/// Name of the option file written by [`TestRepo::write_options`].
pub const OPTIONS_FILE: &str = "revision.options";

/// A temporary directory, optionally a git repository, with an option file.
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a repository on `main` with one commit.
    pub fn with_commit() -> Self {
        let repo = Self::new();
        git::real_git_repo_with_commit(repo.root());
        repo
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the option file inside the root.
    pub fn options_path(&self) -> PathBuf {
        self.root().join(OPTIONS_FILE)
    }

    /// Write the option file and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_options(&self, content: &str) -> PathBuf {
        let path = self.options_path();
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_options: failed to write {}: {e}", path.display()));
        path
    }

    /// Run git in the root. See [`git::git`].
    pub fn git(&self, args: &[&str]) -> String {
        git::git(self.root(), args)
    }

    /// Commit a file. See [`git::commit_file`].
    pub fn commit(&self, file: &str, content: &str) {
        git::commit_file(self.root(), file, content, &format!("Update {file}"));
    }

    /// Modify a tracked file without committing.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn make_dirty(&self) {
        fs::write(self.root().join("README.md"), "# Modified")
            .unwrap_or_else(|e| panic!("make_dirty: failed to write README.md: {e}"));
    }
}
