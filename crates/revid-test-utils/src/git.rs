//! Git repository fixtures.
//!
//! Repositories are built with the `git` CLI so the tests exercise the same
//! binary the descriptor queries run; `git2` is used to read state back.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `path`, panicking with stderr on failure.
///
/// Returns trimmed standard output.
///
/// # Panics
/// Panics if git cannot be spawned or exits unsuccessfully.
pub fn git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "git: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialises a git repository with no commits on branch `main`.
///
/// Configures `user.email`, `user.name`, `commit.gpgsign = false` and
/// `tag.gpgsign = false` so later commits and tags never prompt.
///
/// # Panics
/// Panics if any git operation fails.
pub fn unborn_git_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    git(path, &["config", "tag.gpgsign", "false"]);
    // Older git versions lack `init -b`, so point HEAD at main directly.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
}

/// Initialises a git repository on `main` with one commit.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    unborn_git_repo(path);
    commit_file(path, "README.md", "# Test", "Initial commit");
}

/// Write `file` with `content`, stage it, and commit.
///
/// # Panics
/// Panics if the write or any git operation fails.
pub fn commit_file(path: &Path, file: &str, content: &str, message: &str) {
    fs::write(path.join(file), content)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {file}: {e}"));
    git(path, &["add", file]);
    git(path, &["commit", "-m", message]);
}

/// Create an annotated tag on `HEAD`.
pub fn annotated_tag(path: &Path, name: &str) {
    git(path, &["tag", "-a", name, "-m", name]);
}

/// Create a lightweight tag on `HEAD`.
pub fn lightweight_tag(path: &Path, name: &str) {
    git(path, &["tag", name]);
}

/// Abbreviated id of `HEAD`, read through `git2`.
///
/// # Panics
/// Panics if the repository cannot be opened or `HEAD` has no commit.
pub fn head_short_id(path: &Path, len: usize) -> String {
    let repo = git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("head_short_id: failed to open {}: {e}", path.display()));
    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .unwrap_or_else(|e| panic!("head_short_id: HEAD has no commit: {e}"));
    commit.id().to_string()[..len].to_string()
}
