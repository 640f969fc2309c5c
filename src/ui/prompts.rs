//! Line prompts and waits.
//!
//! The readers here take any `Read` and consume input one byte at a time, so
//! nothing past the answer's newline is read ahead. That keeps a later
//! `poll(2)` on the same descriptor accurate. End-of-input and Ctrl-C are
//! reported as errors; [`TerminalConsole`](super::TerminalConsole) turns them
//! into exit code [`INPUT_ABORTED_EXIT_CODE`].

use crate::error::{PeridotError, Result};
use crate::ui::template::render_markup;
use crate::ui::theme::PeridotTheme;
use std::io::{self, Read, Write};
use std::time::Duration;

/// Exit code used when the user abandons a prompt.
pub const INPUT_ABORTED_EXIT_CODE: i32 = 2;

/// Validation callback for prompt answers.
pub type Validator<'a> = &'a dyn Fn(&str) -> bool;

/// Ask for a line until `validate` accepts it.
///
/// Prints `<message>: ` before every attempt. Answers are trimmed.
pub fn read_prompt<R, W>(
    input: &mut R,
    output: &mut W,
    theme: &PeridotTheme,
    message: &str,
    validate: Option<Validator<'_>>,
) -> Result<String>
where
    R: Read,
    W: Write,
{
    loop {
        write!(output, "{}", render_markup(&format!("{}: ", message), theme))?;
        output.flush()?;

        let answer = read_line(input)?;
        match validate {
            Some(validate) if !validate(&answer) => {
                tracing::debug!(answer = %answer, "prompt answer rejected");
            }
            _ => return Ok(answer),
        }
    }
}

/// Block until a line arrives and discard it.
pub fn wait_for_line<R: Read>(input: &mut R) -> Result<()> {
    read_line(input).map(|_| ())
}

/// Read one trimmed line, stopping right after the newline.
///
/// A final line without a newline is still returned; end-of-input before any
/// byte is [`PeridotError::InputClosed`].
fn read_line<R: Read>(input: &mut R) -> Result<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) if line.is_empty() => return Err(PeridotError::InputClosed),
            Ok(0) => break,
            Ok(_) if byte[0] == b'\n' => break,
            Ok(_) => line.push(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Err(PeridotError::Interrupted)
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

/// Unbuffered reader over a borrowed file descriptor.
#[cfg(unix)]
#[derive(Debug, Clone, Copy)]
pub struct FdReader {
    fd: std::os::unix::io::RawFd,
}

#[cfg(unix)]
impl FdReader {
    /// Read from `fd`. The descriptor is not closed on drop.
    pub fn new(fd: std::os::unix::io::RawFd) -> Self {
        Self { fd }
    }

    /// Read from standard input.
    pub fn stdin() -> Self {
        Self::new(libc::STDIN_FILENO)
    }
}

#[cfg(unix)]
impl Read for FdReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
        let n = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }
}

/// Wait up to `timeout` for a line on stdin.
///
/// Returns `Ok(false)` when the timeout elapsed with nothing read.
#[cfg(unix)]
pub fn wait_for_stdin_line(timeout: Duration) -> Result<bool> {
    wait_for_fd_line(libc::STDIN_FILENO, timeout)
}

// TODO: honor the timeout on Windows via WaitForSingleObject on the stdin handle.
#[cfg(not(unix))]
pub fn wait_for_stdin_line(_timeout: Duration) -> Result<bool> {
    wait_for_line(&mut io::stdin().lock())?;
    Ok(true)
}

/// Wait up to `timeout` for a line on `fd`.
///
/// Once input arrives, blocks until the line is complete. A closed descriptor
/// is [`PeridotError::InputClosed`].
#[cfg(unix)]
pub fn wait_for_fd_line(fd: std::os::unix::io::RawFd, timeout: Duration) -> Result<bool> {
    if !fd_ready(fd, timeout)? {
        tracing::debug!(?timeout, "wait timed out");
        return Ok(false);
    }
    wait_for_line(&mut FdReader::new(fd))?;
    Ok(true)
}

#[cfg(unix)]
fn fd_ready(fd: std::os::unix::io::RawFd, timeout: Duration) -> Result<bool> {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let millis = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);
    // SAFETY: `fds` is a single valid pollfd that outlives the call.
    let rc = unsafe { libc::poll(&mut fds, 1, millis) };
    if rc < 0 {
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::Interrupted {
            return Err(PeridotError::Interrupted);
        }
        return Err(err.into());
    }
    Ok(rc > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::{BufRead, Cursor};

    struct InterruptedReader;

    impl io::Read for InterruptedReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"))
        }
    }

    #[test]
    fn prompt_returns_trimmed_answer() {
        let mut input = Cursor::new("  yes  \n");
        let mut output = Vec::new();
        let answer = read_prompt(
            &mut input,
            &mut output,
            &PeridotTheme::plain(),
            "Continue",
            None,
        )
        .unwrap();
        assert_eq!(answer, "yes");
        assert_eq!(String::from_utf8(output).unwrap(), "Continue: ");
    }

    #[test]
    fn prompt_reprompts_once_per_invalid_answer() {
        let mut input = Cursor::new("abc\n\n42\n");
        let mut output = Vec::new();
        let attempts = Cell::new(0);
        let validate = |answer: &str| {
            attempts.set(attempts.get() + 1);
            answer.parse::<u16>().is_ok()
        };

        let answer = read_prompt(
            &mut input,
            &mut output,
            &PeridotTheme::plain(),
            "Port",
            Some(&validate),
        )
        .unwrap();

        assert_eq!(answer, "42");
        assert_eq!(attempts.get(), 3);
        assert_eq!(String::from_utf8(output).unwrap(), "Port: Port: Port: ");
    }

    #[test]
    fn prompt_end_of_input_is_input_closed() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();
        let reject_all = |_: &str| false;
        let err = read_prompt(
            &mut input,
            &mut output,
            &PeridotTheme::plain(),
            "Name",
            Some(&reject_all),
        )
        .unwrap_err();
        assert!(matches!(err, PeridotError::InputClosed));
        assert_eq!(String::from_utf8(output).unwrap(), "Name: Name: ");
    }

    #[test]
    fn prompt_interrupt_is_interrupted() {
        let mut input = InterruptedReader;
        let mut output = Vec::new();
        let err = read_prompt(
            &mut input,
            &mut output,
            &PeridotTheme::plain(),
            "Name",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PeridotError::Interrupted));
    }

    #[test]
    fn prompt_renders_markup_in_message() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        read_prompt(
            &mut input,
            &mut output,
            &PeridotTheme::plain(),
            "<b>Prefix</b>",
            None,
        )
        .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Prefix: ");
    }

    #[test]
    fn wait_for_line_consumes_one_line() {
        let mut input = Cursor::new("\nsecond\n");
        wait_for_line(&mut input).unwrap();
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn wait_for_line_end_of_input() {
        let mut input = Cursor::new("");
        assert!(matches!(
            wait_for_line(&mut input),
            Err(PeridotError::InputClosed)
        ));
    }

    #[test]
    fn read_stops_after_newline() {
        let mut input = Cursor::new("first\nsecond\n");
        let mut output = Vec::new();
        read_prompt(&mut input, &mut output, &PeridotTheme::plain(), "A", None).unwrap();
        assert_eq!(input.position(), 6);
    }

    #[test]
    fn final_line_without_newline() {
        let mut input = Cursor::new("last");
        let mut output = Vec::new();
        let answer =
            read_prompt(&mut input, &mut output, &PeridotTheme::plain(), "A", None).unwrap();
        assert_eq!(answer, "last");
    }

    #[cfg(unix)]
    mod timed {
        use super::super::*;
        use std::fs::File;
        use std::os::unix::io::{AsRawFd, FromRawFd, OwnedFd};
        use std::time::Instant;

        fn pipe() -> (OwnedFd, File) {
            let mut fds = [0 as libc::c_int; 2];
            // SAFETY: `fds` has room for the two descriptors pipe(2) returns.
            let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
            assert_eq!(rc, 0);
            // SAFETY: both descriptors were just created and are owned here.
            unsafe { (OwnedFd::from_raw_fd(fds[0]), File::from_raw_fd(fds[1])) }
        }

        #[test]
        fn empty_pipe_times_out() {
            let (reader, _writer) = pipe();
            let timeout = Duration::from_millis(150);

            let started = Instant::now();
            let got_line = wait_for_fd_line(reader.as_raw_fd(), timeout).unwrap();
            assert!(!got_line);
            assert!(started.elapsed() >= Duration::from_millis(100));
        }

        #[test]
        fn pending_line_returns_early() {
            let (reader, mut writer) = pipe();
            writer.write_all(b"\n").unwrap();

            let started = Instant::now();
            let got_line = wait_for_fd_line(reader.as_raw_fd(), Duration::from_secs(30)).unwrap();
            assert!(got_line);
            assert!(started.elapsed() < Duration::from_secs(30));
        }

        #[test]
        fn only_one_line_is_consumed() {
            let (reader, mut writer) = pipe();
            writer.write_all(b"\n\n").unwrap();
            let fd = reader.as_raw_fd();

            assert!(wait_for_fd_line(fd, Duration::from_secs(5)).unwrap());
            assert!(wait_for_fd_line(fd, Duration::from_secs(5)).unwrap());
            assert!(!wait_for_fd_line(fd, Duration::from_millis(50)).unwrap());
        }

        #[test]
        fn closed_writer_is_input_closed() {
            let (reader, writer) = pipe();
            drop(writer);

            let err = wait_for_fd_line(reader.as_raw_fd(), Duration::from_secs(5)).unwrap_err();
            assert!(matches!(err, PeridotError::InputClosed));
        }

        #[test]
        fn fd_reader_prompt() {
            let (reader, mut writer) = pipe();
            writer.write_all(b"8080\n").unwrap();
            let mut input = FdReader::new(reader.as_raw_fd());
            let mut output = Vec::new();

            let answer =
                read_prompt(&mut input, &mut output, &PeridotTheme::plain(), "Port", None)
                    .unwrap();
            assert_eq!(answer, "8080");
        }
    }
}
