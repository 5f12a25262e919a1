//! Git revision queries for revid
//!
//! Runs `git` through the platform shell in a resolved working directory and
//! combines the output with option-file settings into a revision descriptor.

pub mod command;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod kinds;
pub mod render;
pub mod settings;
pub mod workdir;

pub use command::{CommandRunner, ShellRunner, execute_command};
pub use describe::{BRANCH_QUERY, DescribeQuery};
pub use descriptor::RevisionDescriptor;
pub use error::{Error, Result};
pub use kinds::{GitReferenceType, GitTagState, ParentCommitType};
pub use render::{render_source, validate_names, write_source};
pub use settings::RevisionSettings;
pub use workdir::resolve_working_directory;
