//! External command execution.

use crate::error::{PeridotError, Result};
use crate::shell::signal::{self, InterruptGuard};
use std::process::{Command, ExitStatus, Stdio};

/// Run a command, echoing it first as `# program args...`.
///
/// Returns whether it exited successfully. A command that cannot be spawned
/// counts as a failure. A child killed by Ctrl-C stops the caller with
/// [`PeridotError::Interrupted`] so an installer does not carry on as if the
/// user had merely seen a failed step. While the child runs, this process
/// ignores Ctrl-C so that only the child reacts to it.
pub fn sh(program: &str, args: &[&str]) -> Result<bool> {
    println!("# {}", display_command(program, args));

    let mut command = Command::new(program);
    command.args(args);
    signal::reset_in_child(&mut command);
    let spawned = {
        let _ignore = InterruptGuard::ignore();
        command.status()
    };
    let status = match spawned {
        Ok(status) => status,
        Err(e) => {
            tracing::debug!(program, error = %e, "failed to spawn command");
            return Ok(false);
        }
    };

    if status.success() {
        return Ok(true);
    }
    if killed_by_interrupt(&status) {
        return Err(PeridotError::Interrupted);
    }
    tracing::debug!(program, code = ?status.code(), "command failed");
    Ok(false)
}

/// Run a command silently and report whether it exited 0.
pub fn command_succeeds(program: &str, args: &[&str]) -> bool {
    let succeeded = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success());
    tracing::debug!(program, ?args, succeeded, "checked command");
    succeeded
}

/// Run a command line through the platform shell silently and report
/// whether it exited 0.
pub fn shell_succeeds(command_line: &str) -> bool {
    let (shell, flag) = shell_invocation();
    command_succeeds(shell, &[flag, command_line])
}

fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}
