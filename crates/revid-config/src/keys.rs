//! The fixed vocabulary of recognized option keys.

/// Every key the option file may set.
///
/// Keys in a file that are not listed here are ignored rather than rejected,
/// so older builds keep working with newer option files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Semantic version major number
    MajorVersion,
    /// Semantic version minor number
    MinorVersion,
    /// Semantic version patch number
    PatchVersion,
    /// File name of the generated source file
    GeneratedFileName,
    /// Module the generated item lives in
    GeneratedNamespace,
    /// Name of the generated type
    GeneratedTypeName,
    /// Name of the generated constant
    GeneratedFieldName,
    /// Text placed before the version number
    Prefix,
    /// Text placed after the whole descriptor
    Suffix,
    /// Mark appended when the working tree has local modifications
    DirtyMark,
    /// Mark appended when the repository is corrupt
    BrokenMark,
    /// Label used for an anonymous (detached) `HEAD`
    DetachedHeadLabel,
    /// Label used for an unborn branch
    InvalidHeadLabel,
    /// Branch name that is left out of the descriptor
    DefaultGitBranchName,
    /// Repository root, relative to the option file's directory
    RepositoryRootRelativeToConfigurationFilePath,
    /// Which references `git describe` may use
    GitReferenceType,
    /// How many most-recent tags to consider
    CandidateAmount,
    /// Hexadecimal digits in an abbreviated object name
    AbbrevLength,
    /// Whether to follow only the first parent of merges
    FirstParentOnly,
    /// Whether tags must predate or contain the commit
    Contains,
    /// Glob patterns tags must match
    MatchPatterns,
    /// Glob patterns tags must not match
    ExcludePatterns,
}

impl ConfigKey {
    /// All recognized keys, in declaration order.
    pub const ALL: [ConfigKey; 22] = [
        Self::MajorVersion,
        Self::MinorVersion,
        Self::PatchVersion,
        Self::GeneratedFileName,
        Self::GeneratedNamespace,
        Self::GeneratedTypeName,
        Self::GeneratedFieldName,
        Self::Prefix,
        Self::Suffix,
        Self::DirtyMark,
        Self::BrokenMark,
        Self::DetachedHeadLabel,
        Self::InvalidHeadLabel,
        Self::DefaultGitBranchName,
        Self::RepositoryRootRelativeToConfigurationFilePath,
        Self::GitReferenceType,
        Self::CandidateAmount,
        Self::AbbrevLength,
        Self::FirstParentOnly,
        Self::Contains,
        Self::MatchPatterns,
        Self::ExcludePatterns,
    ];

    /// The key as written in an option file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MajorVersion => "MajorVersion",
            Self::MinorVersion => "MinorVersion",
            Self::PatchVersion => "PatchVersion",
            Self::GeneratedFileName => "GeneratedFileName",
            Self::GeneratedNamespace => "GeneratedNamespace",
            Self::GeneratedTypeName => "GeneratedTypeName",
            Self::GeneratedFieldName => "GeneratedFieldName",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::DirtyMark => "DirtyMark",
            Self::BrokenMark => "BrokenMark",
            Self::DetachedHeadLabel => "DetachedHeadLabel",
            Self::InvalidHeadLabel => "InvalidHeadLabel",
            Self::DefaultGitBranchName => "DefaultGitBranchName",
            Self::RepositoryRootRelativeToConfigurationFilePath => {
                "RepositoryRootRelativeToConfigurationFilePath"
            }
            Self::GitReferenceType => "GitReferenceType",
            Self::CandidateAmount => "CandidateAmount",
            Self::AbbrevLength => "AbbrevLength",
            Self::FirstParentOnly => "FirstParentOnly",
            Self::Contains => "Contains",
            Self::MatchPatterns => "MatchPatterns",
            Self::ExcludePatterns => "ExcludePatterns",
        }
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
