use std::collections::VecDeque;
use std::io::{self, BufRead};

use console::Term;

/// Line-oriented console the workflow reads choices from and prints to.
pub trait Console {
    /// Print `prompt` and block until the user enters a line.
    ///
    /// Returns `Ok(None)` once input is exhausted (closed stdin).
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn print(&mut self, line: &str);
}

/// Interactive terminal backed by `console::Term`.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Console for TermConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        // Read through stdin directly so a closed pipe shows up as zero bytes.
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, line: &str) {
        if let Err(e) = self.term.write_line(line) {
            tracing::warn!("failed to write to terminal: {e}");
        }
    }
}

/// Console that replays queued input and records everything printed.
///
/// Used to drive whole sessions without a terminal.
#[derive(Debug)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Recorded output is compared as plain text.
        console::set_colors_enabled(false);
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every prompt issued, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
