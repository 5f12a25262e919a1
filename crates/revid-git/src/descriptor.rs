//! Revision descriptor assembly

use std::path::Path;

use serde::Serialize;

use crate::command::{CommandRunner, ShellRunner};
use crate::describe::{BRANCH_QUERY, DescribeQuery};
use crate::kinds::GitTagState;
use crate::settings::RevisionSettings;

/// A resolved revision descriptor and the parts it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionDescriptor {
    /// The full descriptor, e.g. `v1.4.0-rc.1+feature.1.3.0-7-gabc1234-dirty`
    pub descriptor: String,
    /// `major.minor.patch` from the option file
    pub version: String,
    /// Raw `git describe` output, empty when git printed nothing
    pub describe: String,
    /// Branch label: the branch name, the detached or unborn label, or empty
    /// when on the default branch
    pub branch: String,
    /// Whether the describe output carries the dirty or broken mark
    pub dirty: bool,
}

impl RevisionDescriptor {
    /// Query git in `directory` and assemble the descriptor.
    pub fn resolve(settings: &RevisionSettings, directory: &Path) -> Self {
        Self::resolve_with(&ShellRunner, settings, directory)
    }

    /// Like [`RevisionDescriptor::resolve`] with a custom runner.
    ///
    /// The describe query runs first and the branch query second; each call
    /// blocks until git exits.
    pub fn resolve_with<R: CommandRunner + ?Sized>(
        runner: &R,
        settings: &RevisionSettings,
        directory: &Path,
    ) -> Self {
        let query = DescribeQuery::from_settings(settings);
        let describe = runner.run(&query.command(), directory);
        let branch = runner.run(BRANCH_QUERY, directory);
        tracing::debug!(describe = %describe, branch = %branch, "Revision queries finished");
        Self::assemble(settings, &describe, &branch)
    }

    /// Build the descriptor from already-captured git output.
    ///
    /// Layout: `{prefix}{major}.{minor}.{patch}{suffix}[+{metadata}]`, where
    /// metadata joins the branch label and describe output with `.`.
    pub fn assemble(settings: &RevisionSettings, describe: &str, branch: &str) -> Self {
        let version = settings.version_core();
        let describe = describe.trim().to_string();
        // Without a commit `--always` has nothing to print, so empty describe
        // output means HEAD is unborn (or this is not a repository).
        let branch = if describe.is_empty() {
            settings.invalid_head_label.clone()
        } else {
            branch_label(settings, branch.trim())
        };

        // Marks are never requested together with `--contains`.
        let dirty = settings.tag_state != GitTagState::ContainsCommit
            && [&settings.dirty_mark, &settings.broken_mark]
                .iter()
                .any(|mark| carries_mark(&describe, mark, settings.abbrev_length));

        let metadata: Vec<String> = [branch.as_str(), describe.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(sanitize_identifier)
            .collect();

        let mut descriptor = format!("{}{}{}", settings.prefix, version, settings.suffix);
        if !metadata.is_empty() {
            descriptor.push('+');
            descriptor.push_str(&metadata.join("."));
        }

        Self {
            descriptor,
            version,
            describe,
            branch,
            dirty,
        }
    }
}

impl std::fmt::Display for RevisionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor)
    }
}

fn branch_label(settings: &RevisionSettings, branch: &str) -> String {
    match branch {
        "" => settings.detached_head_label.clone(),
        name if name == settings.default_branch_name => String::new(),
        name => name.to_string(),
    }
}

/// Whether `mark` was appended after the abbreviated hash that ends clean
/// describe output (`<tag>-<n>-g<hash>` or a bare `<hash>`).
///
/// Git never abbreviates below four digits. With an abbrev of 0 no hash is
/// printed, so a plain suffix match is all there is.
fn carries_mark(describe: &str, mark: &str, abbrev_length: i32) -> bool {
    if mark.is_empty() {
        return false;
    }
    let Some(clean) = describe.strip_suffix(mark) else {
        return false;
    };
    if abbrev_length <= 0 {
        return true;
    }

    let hash = match clean.rsplit_once("-g") {
        Some((_, hash)) => hash,
        None => clean,
    };
    let min_len = abbrev_length.max(4) as usize;
    hash.len() >= min_len && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Replace characters that are not allowed in build metadata with `-`.
fn sanitize_identifier(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("feature/login"), "feature-login");
        assert_eq!(sanitize_identifier("heads/main-0-gabc"), "heads-main-0-gabc");
        assert_eq!(sanitize_identifier("1.2.3-4-gabc"), "1.2.3-4-gabc");
    }

    #[test]
    fn test_mark_must_follow_the_hash() {
        assert!(carries_mark("1.0-0-gabc1234-dirty", "-dirty", 7));
        assert!(carries_mark("abc1234-dirty", "-dirty", 7));
        assert!(carries_mark("1.0-0-gabc1234a", "a", 7));
        assert!(!carries_mark("1.0-0-gabc123a", "a", 7));
        assert!(!carries_mark("abc123a", "a", 7));
        assert!(!carries_mark("1.0-0-gabc1234", "", 7));
    }

    #[test]
    fn test_branch_label_cases() {
        let settings = RevisionSettings::default();
        assert_eq!(branch_label(&settings, ""), "detached");
        assert_eq!(branch_label(&settings, "main"), "");
        assert_eq!(branch_label(&settings, "topic"), "topic");
    }
}
