//! Line-oriented question/answer helper over any reader and writer.

use crate::error::{PosterError, Result};
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads trimmed answers from `input`.
///
/// End of input reads as an empty answer, so a closed stdin walks through
/// every remaining question taking its default.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of context.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(write_err)
    }

    /// Ask a question and return the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        Ok(self.read_answer(question)?.unwrap_or_default())
    }

    /// Ask a question, falling back to `default` on an empty answer.
    pub fn ask_or(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(question)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Collect entries until an empty answer or `max` entries.
    ///
    /// `question` receives the 1-based number of the entry being asked for.
    pub fn ask_list(&mut self, max: usize, question: impl Fn(usize) -> String) -> Result<Vec<String>> {
        let mut items = Vec::new();
        while items.len() < max {
            let answer = self.ask(&question(items.len() + 1))?;
            if answer.is_empty() {
                break;
            }
            items.push(answer);
        }
        Ok(items)
    }

    /// Collect exactly `count` non-empty entries, re-asking on blanks.
    ///
    /// Stops early only when input runs out.
    pub fn ask_exact(&mut self, count: usize, question: impl Fn(usize) -> String) -> Result<Vec<String>> {
        let mut items = Vec::new();
        while items.len() < count {
            match self.read_answer(&question(items.len() + 1))? {
                Some(answer) if !answer.is_empty() => items.push(answer),
                Some(_) => {}
                None => {
                    tracing::warn!(got = items.len(), wanted = count, "input ended early");
                    break;
                }
            }
        }
        Ok(items)
    }

    /// Consume the prompter, returning the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input.
    fn read_answer(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}").map_err(write_err)?;
        self.output.flush().map_err(write_err)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PosterError::Io(format!("failed to read input: {}", e)))?;
        if read == 0 {
            // Keep the transcript readable when the answer never arrived.
            writeln!(self.output).map_err(write_err)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn write_err(e: std::io::Error) -> PosterError {
    PosterError::Io(format!("failed to write prompt: {}", e))
}
