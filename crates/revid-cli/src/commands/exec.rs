//! Exec command implementation

use std::path::Path;

use revid_git::execute_command;

use crate::error::Result;

/// Run the exec command.
///
/// Output is printed as-is; an empty result prints nothing, matching how
/// revision queries treat failures.
pub fn run_exec(directory: &Path, command: &[String]) -> Result<()> {
    let output = execute_command(&command.join(" "), directory);
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
