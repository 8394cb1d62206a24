//! The text prompt/response boundary.
//!
//! The intake workflow and the menu loop only talk to a [`Console`], so they
//! can be driven from a real terminal or from a scripted buffer alike.

pub mod shell;

use std::io::{self, BufRead, Write};

/// A line-oriented conversation with the user.
pub trait Console {
    /// Show `text` (no line break) and wait for the next response line.
    ///
    /// Returns the line with surrounding whitespace trimmed, or `None` once
    /// the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Show `text` followed by a line break.
    fn say(&mut self, text: &str) -> io::Result<()>;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail parsing like any other bad token.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }
}
