//! Synchronous shell command execution

use std::path::Path;
use std::process::{Command, Stdio};

use crate::workdir::resolve_working_directory;

/// Runs command text in a directory and returns its standard output.
///
/// Implementations must block until the command has finished. Output that
/// could not be produced for any reason is reported as an empty string.
pub trait CommandRunner {
    fn run(&self, command: &str, directory: &Path) -> String;
}

/// [`CommandRunner`] backed by the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, directory: &Path) -> String {
        execute_command(command, directory)
    }
}

/// Run `command` through the platform shell inside `directory`.
///
/// `directory` may also be a file, in which case its parent directory is
/// used. Returns standard output with trailing whitespace removed. A blank
/// command, a blank or unresolvable directory, or a process that cannot be
/// spawned all yield an empty string. The exit status is not inspected and
/// standard error is discarded, so a failing command is indistinguishable
/// from one that printed nothing.
///
/// There is no timeout: this blocks until the child exits.
pub fn execute_command(command: &str, directory: impl AsRef<Path>) -> String {
    let directory = directory.as_ref();
    if command.trim().is_empty() {
        return String::new();
    }
    if directory.as_os_str().to_string_lossy().trim().is_empty() {
        return String::new();
    }
    let Some(working_directory) = resolve_working_directory(directory) else {
        tracing::debug!(directory = %directory.display(), "No working directory for command");
        return String::new();
    };

    tracing::debug!(
        command,
        directory = %working_directory.display(),
        "Executing command"
    );

    let output = shell_command(command)
        .current_dir(&working_directory)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string(),
        Err(e) => {
            tracing::warn!("Failed to spawn shell for `{}`: {}", command, e);
            String::new()
        }
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    let mut cmd = Command::new("cmd.exe");
    cmd.arg("/c").raw_arg(command).creation_flags(CREATE_NO_WINDOW);
    cmd
}
