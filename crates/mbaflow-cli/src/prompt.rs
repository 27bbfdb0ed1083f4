//! Line-oriented console prompts.
//!
//! Generic over the reader and writer so the collector can be driven from a
//! byte buffer in tests.

use std::io::{BufRead, Write};

use crate::error::{CliResult, IntoCli};

/// Asks questions on `W` and reads trimmed answers from `R`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.output, "{line}").with_cli_context(|| "failed to write prompt")
    }

    /// Print `question` without a newline and read one answer.
    ///
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{question}").with_cli_context(|| "failed to write prompt")?;
        self.output
            .flush()
            .with_cli_context(|| "failed to flush prompt")?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .with_cli_context(|| format!("failed to read answer to '{}'", question.trim()))?;
        Ok(answer.trim().to_string())
    }

    /// Give back the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
