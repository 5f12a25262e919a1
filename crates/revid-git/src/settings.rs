//! Option file values resolved into typed settings

use std::path::{Path, PathBuf};

use revid_config::{ConfigKey, OptionLookup, load_options};
use serde::Serialize;

use crate::Result;
use crate::kinds::{GitReferenceType, GitTagState, ParentCommitType};

/// Every recognized option, resolved once with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionSettings {
    pub major_version: i32,
    pub minor_version: i32,
    pub patch_version: i32,
    pub prefix: String,
    pub suffix: String,
    pub dirty_mark: String,
    pub broken_mark: String,
    pub detached_head_label: String,
    pub invalid_head_label: String,
    pub default_branch_name: String,
    /// Repository root relative to the option file's directory
    pub repository_root: String,
    pub generated_file_name: String,
    pub generated_namespace: String,
    pub generated_type_name: String,
    pub generated_field_name: String,
    pub reference_type: GitReferenceType,
    pub candidate_amount: i32,
    pub abbrev_length: i32,
    pub parent_commit: ParentCommitType,
    pub tag_state: GitTagState,
    pub match_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for RevisionSettings {
    fn default() -> Self {
        Self {
            major_version: 0,
            minor_version: 0,
            patch_version: 0,
            prefix: String::new(),
            suffix: String::new(),
            dirty_mark: "-dirty".to_string(),
            broken_mark: String::new(),
            detached_head_label: "detached".to_string(),
            invalid_head_label: "unborn".to_string(),
            default_branch_name: "main".to_string(),
            repository_root: ".".to_string(),
            generated_file_name: "revision.rs".to_string(),
            generated_namespace: "revision".to_string(),
            generated_type_name: "Revision".to_string(),
            generated_field_name: "DESCRIPTOR".to_string(),
            reference_type: GitReferenceType::AnnotatedTags,
            candidate_amount: 10,
            abbrev_length: 7,
            parent_commit: ParentCommitType::Any,
            tag_state: GitTagState::PredatesCommit,
            match_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl RevisionSettings {
    /// Resolve settings from parsed options. Missing or malformed values
    /// keep their defaults.
    pub fn from_options(options: &impl OptionLookup) -> Self {
        let d = Self::default();
        Self {
            major_version: options.get_int_or(ConfigKey::MajorVersion, d.major_version),
            minor_version: options.get_int_or(ConfigKey::MinorVersion, d.minor_version),
            patch_version: options.get_int_or(ConfigKey::PatchVersion, d.patch_version),
            prefix: options.get_string_or(ConfigKey::Prefix, &d.prefix),
            suffix: options.get_string_or(ConfigKey::Suffix, &d.suffix),
            dirty_mark: options.get_string_or(ConfigKey::DirtyMark, &d.dirty_mark),
            broken_mark: options.get_string_or(ConfigKey::BrokenMark, &d.broken_mark),
            detached_head_label: options
                .get_string_or(ConfigKey::DetachedHeadLabel, &d.detached_head_label),
            invalid_head_label: options
                .get_string_or(ConfigKey::InvalidHeadLabel, &d.invalid_head_label),
            default_branch_name: options
                .get_string_or(ConfigKey::DefaultGitBranchName, &d.default_branch_name),
            repository_root: options.get_string_or(
                ConfigKey::RepositoryRootRelativeToConfigurationFilePath,
                &d.repository_root,
            ),
            generated_file_name: options
                .get_string_or(ConfigKey::GeneratedFileName, &d.generated_file_name),
            generated_namespace: options
                .get_string_or(ConfigKey::GeneratedNamespace, &d.generated_namespace),
            generated_type_name: options
                .get_string_or(ConfigKey::GeneratedTypeName, &d.generated_type_name),
            generated_field_name: options
                .get_string_or(ConfigKey::GeneratedFieldName, &d.generated_field_name),
            reference_type: options.get_enum_or(ConfigKey::GitReferenceType, d.reference_type),
            candidate_amount: options.get_int_or(ConfigKey::CandidateAmount, d.candidate_amount),
            abbrev_length: options.get_int_or(ConfigKey::AbbrevLength, d.abbrev_length),
            parent_commit: options.get_enum_or(ConfigKey::FirstParentOnly, d.parent_commit),
            tag_state: options.get_enum_or(ConfigKey::Contains, d.tag_state),
            match_patterns: options.get_list_or(ConfigKey::MatchPatterns, d.match_patterns),
            exclude_patterns: options.get_list_or(ConfigKey::ExcludePatterns, d.exclude_patterns),
        }
    }

    /// Read an option file and resolve it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let options = load_options(config_path)?;
        Ok(Self::from_options(&options))
    }

    /// `major.minor.patch`
    pub fn version_core(&self) -> String {
        format!(
            "{}.{}.{}",
            self.major_version, self.minor_version, self.patch_version
        )
    }

    /// Directory git should run in, given the option file's own path.
    pub fn repository_directory(&self, config_path: impl AsRef<Path>) -> PathBuf {
        let config_dir = config_path.as_ref().parent().unwrap_or(Path::new(""));
        config_dir.join(&self.repository_root)
    }
}
