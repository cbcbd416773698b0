//! Prompt boundary: display a labeled prompt, read one line.
//!
//! Every interaction of the payload builder and the session loop goes through
//! [`PromptSource`], so the whole interactive flow can be driven by a scripted
//! sequence of responses instead of a live terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Injectable input source for interactive prompts.
pub trait PromptSource {
    /// Display `label` (without a trailing newline) and read one line of
    /// response, stripped of the line terminator. End of input reads as an
    /// empty line.
    fn prompt(&mut self, label: &str) -> io::Result<String>;

    /// Display one full line of output that expects no response.
    fn announce(&mut self, line: &str) -> io::Result<()>;
}

/// Stdin/stdout-backed prompt source used by the interactive binary.
#[derive(Debug, Default)]
pub struct StdioPrompt;

impl PromptSource for StdioPrompt {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        print!("{label}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(String::new());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn announce(&mut self, line: &str) -> io::Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Prompt source that replays a canned sequence of responses.
///
/// Used by tests and scripted runs. An exhausted script reads as empty lines,
/// which is also how end of input behaves. Everything displayed (prompt
/// labels and announcements) is recorded for inspection.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    responses: VecDeque<String>,
    shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }

    /// Everything displayed so far, in order.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl PromptSource for ScriptedPrompt {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.shown.push(label.to_string());
        Ok(self.responses.pop_front().unwrap_or_default())
    }

    fn announce(&mut self, line: &str) -> io::Result<()> {
        self.shown.push(line.to_string());
        Ok(())
    }
}
