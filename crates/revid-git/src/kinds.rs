//! Closed option vocabularies for revision queries
//!
//! Each type reserves `None` (0) as its default "unset" value. `None` is
//! never accepted from an option file; see [`OptionEnum`].

use revid_config::OptionEnum;
use serde::Serialize;

/// Which references `git describe` may name the commit after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GitReferenceType {
    /// Unset. Never a valid choice.
    #[default]
    None = 0,
    /// Annotated tags only
    AnnotatedTags = 1,
    /// Annotated and lightweight tags
    Tags = 2,
    /// Any reference, including branches
    All = 3,
}

impl OptionEnum for GitReferenceType {
    const MEMBERS: &'static [Self] = &[Self::None, Self::AnnotatedTags, Self::Tags, Self::All];

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::AnnotatedTags => "AnnotatedTags",
            Self::Tags => "Tags",
            Self::All => "All",
        }
    }

    fn discriminant(self) -> i32 {
        self as i32
    }
}

/// Whether the chosen tag must come before or after the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GitTagState {
    /// Unset. Never a valid choice.
    #[default]
    None = 0,
    /// The tag predates the commit
    PredatesCommit = 1,
    /// The tag contains the commit
    ContainsCommit = 2,
}

impl OptionEnum for GitTagState {
    const MEMBERS: &'static [Self] = &[Self::None, Self::PredatesCommit, Self::ContainsCommit];

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::PredatesCommit => "PredatesCommit",
            Self::ContainsCommit => "ContainsCommit",
        }
    }

    fn discriminant(self) -> i32 {
        self as i32
    }
}

/// Which parents history traversal may follow at merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ParentCommitType {
    /// Unset. Never a valid choice.
    #[default]
    None = 0,
    Any = 1,
    FirstOnly = 2,
}

impl OptionEnum for ParentCommitType {
    const MEMBERS: &'static [Self] = &[Self::None, Self::Any, Self::FirstOnly];

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Any => "Any",
            Self::FirstOnly => "FirstOnly",
        }
    }

    fn discriminant(self) -> i32 {
        self as i32
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.name())
                }
            }
        )*
    };
}

display_by_name!(GitReferenceType, GitTagState, ParentCommitType);
