//! Input source for the `input` command.
//!
//! Mirrors the print handler: enum dispatch over a blocking stdin reader and
//! a scripted queue of lines used by tests and embedders.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where `input` reads its lines from.
pub enum InputSource {
    /// Blocking reads from the process's standard input.
    Stdin,
    /// Pre-queued lines; exhausted queue reads as end of input.
    Scripted(Mutex<VecDeque<String>>),
}

impl InputSource {
    /// Read one line without its line terminator.
    ///
    /// `Ok(None)` means end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                if io::stdin().lock().read_line(&mut buf)? == 0 {
                    return Ok(None);
                }
                let trimmed = buf.trim_end_matches(['\n', '\r']).len();
                buf.truncate(trimmed);
                Ok(Some(buf))
            }
            Self::Scripted(lines) => Ok(lines.lock().pop_front()),
        }
    }

    /// Queue another line on a scripted source. Ignored for stdin.
    pub fn push_line(&self, line: impl Into<String>) {
        if let Self::Scripted(lines) = self {
            lines.lock().push_back(line.into());
        }
    }
}

/// Shared input source that can be passed around.
pub type SharedInputSource = Arc<InputSource>;

/// Create an input source reading standard input.
pub fn stdin_source() -> SharedInputSource {
    Arc::new(InputSource::Stdin)
}

/// Create an input source that replays `lines` in order.
pub fn scripted_source<I, S>(lines: I) -> SharedInputSource
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputSource::Scripted(Mutex::new(
        lines.into_iter().map(Into::into).collect(),
    )))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
