//! SIGINT disposition guards.
//!
//! A guard swaps the process-wide SIGINT disposition and puts the previous one
//! back when dropped. On non-unix targets guards do nothing.

#[cfg(unix)]
use crate::ui::INPUT_ABORTED_EXIT_CODE;

/// Scoped change of how the process reacts to Ctrl-C.
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

#[cfg(unix)]
extern "C" fn exit_on_interrupt(_signal: libc::c_int) {
    const RESET_LINE: &[u8] = b"\x1b[0m\n";
    // SAFETY: write(2) and _exit(2) are async-signal-safe.
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            RESET_LINE.as_ptr().cast(),
            RESET_LINE.len(),
        );
        libc::_exit(INPUT_ABORTED_EXIT_CODE);
    }
}

impl InterruptGuard {
    /// Ctrl-C resets terminal colors and exits with
    /// [`INPUT_ABORTED_EXIT_CODE`]. Used around blocking reads.
    #[cfg(unix)]
    pub fn install() -> Self {
        Self::swap(exit_on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t)
    }

    /// Ctrl-C is ignored by this process, as `system(3)` does while a child
    /// runs. Children must reset SIGINT themselves; see [`reset_in_child`].
    #[cfg(unix)]
    pub fn ignore() -> Self {
        Self::swap(libc::SIG_IGN)
    }

    #[cfg(unix)]
    fn swap(handler: libc::sighandler_t) -> Self {
        // SAFETY: `handler` is SIG_IGN or a handler that only calls
        // async-signal-safe functions.
        let previous = unsafe { libc::signal(libc::SIGINT, handler) };
        Self { previous }
    }

    #[cfg(not(unix))]
    pub fn install() -> Self {
        Self {}
    }

    #[cfg(not(unix))]
    pub fn ignore() -> Self {
        Self {}
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: restores the disposition saved when the guard was made.
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

/// Make a spawned child start with the default SIGINT disposition even when
/// the parent is ignoring it.
#[cfg(unix)]
pub fn reset_in_child(command: &mut std::process::Command) {
    use std::os::unix::process::CommandExt;
    // SAFETY: signal(2) is async-signal-safe, which is all pre_exec allows.
    unsafe {
        command.pre_exec(|| {
            libc::signal(libc::SIGINT, libc::SIG_DFL);
            Ok(())
        });
    }
}

#[cfg(not(unix))]
pub fn reset_in_child(_command: &mut std::process::Command) {}

/// Serializes tests that change the SIGINT disposition.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
