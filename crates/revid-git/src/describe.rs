//! `git describe` command construction

use crate::kinds::{GitReferenceType, GitTagState, ParentCommitType};
use crate::settings::RevisionSettings;

/// Prints the current branch name (also for an unborn branch), nothing when
/// `HEAD` is detached.
pub const BRANCH_QUERY: &str = "git symbolic-ref --short -q HEAD";

/// Options for one `git describe` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeQuery {
    pub reference_type: GitReferenceType,
    pub tag_state: GitTagState,
    pub parent_commit: ParentCommitType,
    pub candidates: u32,
    pub abbrev: u32,
    pub match_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub dirty_mark: String,
    pub broken_mark: String,
}

impl DescribeQuery {
    pub fn from_settings(settings: &RevisionSettings) -> Self {
        Self {
            reference_type: settings.reference_type,
            tag_state: settings.tag_state,
            parent_commit: settings.parent_commit,
            candidates: settings.candidate_amount.max(0) as u32,
            abbrev: settings.abbrev_length.max(0) as u32,
            match_patterns: settings.match_patterns.clone(),
            exclude_patterns: settings.exclude_patterns.clone(),
            dirty_mark: settings.dirty_mark.clone(),
            broken_mark: settings.broken_mark.clone(),
        }
    }

    /// Shell command text for this query.
    ///
    /// `--always` makes git fall back to an abbreviated hash when no
    /// reference qualifies. Working-tree marks are left out with
    /// `--contains`, which git does not allow together with them.
    pub fn command(&self) -> String {
        let mut args: Vec<String> = vec!["git".into(), "describe".into(), "--always".into()];
        let contains = self.tag_state == GitTagState::ContainsCommit;

        match self.reference_type {
            GitReferenceType::Tags => args.push("--tags".into()),
            GitReferenceType::All => args.push("--all".into()),
            GitReferenceType::AnnotatedTags | GitReferenceType::None => {}
        }

        if contains {
            args.push("--contains".into());
        } else {
            args.push("--long".into());
        }

        if self.parent_commit == ParentCommitType::FirstOnly {
            args.push("--first-parent".into());
        }

        args.push(format!("--candidates={}", self.candidates));
        args.push(format!("--abbrev={}", self.abbrev));

        for pattern in &self.match_patterns {
            args.push(format!("--match {}", shell_quote(pattern)));
        }
        for pattern in &self.exclude_patterns {
            args.push(format!("--exclude {}", shell_quote(pattern)));
        }

        if !contains {
            if !self.dirty_mark.is_empty() {
                args.push(format!("--dirty={}", shell_quote(&self.dirty_mark)));
            }
            if !self.broken_mark.is_empty() {
                args.push(format!("--broken={}", shell_quote(&self.broken_mark)));
            }
        }

        args.join(" ")
    }
}

/// Quote a value as a single shell word.
#[cfg(not(windows))]
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Quote a value as a single shell word.
#[cfg(windows)]
pub fn shell_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
