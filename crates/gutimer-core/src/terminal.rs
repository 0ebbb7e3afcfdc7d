//! Scoped cbreak mode for the controlling terminal.
//!
//! [`CbreakGuard`] turns off canonical line editing and local echo so every
//! keystroke reaches the input reader immediately, and puts the original
//! settings back when dropped. Signals such as Ctrl-C stay enabled.

#[cfg(unix)]
use std::os::fd::AsFd;

#[cfg(unix)]
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

use gutimer_common::error::{GutimerError, Result};

/// Holds a terminal in cbreak mode until dropped.
#[cfg(unix)]
#[derive(Debug)]
pub struct CbreakGuard<F: AsFd> {
    fd: F,
    original: Termios,
}

#[cfg(unix)]
impl<F: AsFd> CbreakGuard<F> {
    /// Switches the terminal behind `fd` into cbreak mode.
    ///
    /// # Errors
    ///
    /// Returns [`GutimerError::Terminal`] if `fd` is not a terminal or its
    /// attributes cannot be changed.
    pub fn acquire(fd: F) -> Result<Self> {
        let original = termios::tcgetattr(&fd).map_err(|e| GutimerError::Terminal {
            message: format!("reading terminal attributes failed: {e}"),
        })?;

        let mut cbreak = original.clone();
        cbreak.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        cbreak.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        cbreak.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        termios::tcsetattr(&fd, SetArg::TCSANOW, &cbreak).map_err(|e| {
            GutimerError::Terminal {
                message: format!("entering cbreak mode failed: {e}"),
            }
        })?;
        tracing::debug!("terminal switched to cbreak mode");

        Ok(Self { fd, original })
    }
}

#[cfg(unix)]
impl<F: AsFd> Drop for CbreakGuard<F> {
    fn drop(&mut self) {
        match termios::tcsetattr(&self.fd, SetArg::TCSANOW, &self.original) {
            Ok(()) => tracing::debug!("terminal mode restored"),
            Err(e) => tracing::warn!(error = %e, "failed to restore terminal mode"),
        }
    }
}

/// Stub for non-Unix platforms.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct CbreakGuard<F> {
    _fd: F,
}

#[cfg(not(unix))]
impl<F> CbreakGuard<F> {
    /// Stub for non-Unix platforms.
    ///
    /// # Errors
    ///
    /// Always returns an error: cbreak mode relies on termios.
    pub fn acquire(_fd: F) -> Result<Self> {
        Err(GutimerError::Terminal {
            message: "cbreak mode requires a Unix terminal".into(),
        })
    }
}
