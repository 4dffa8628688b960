use std::io::{self, BufRead, Write};

use crate::{Error, Result};

/// Line based questions on a console
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Input(format!("no answer to '{}'", question.trim())));
        }
        Ok(line.trim().to_owned())
    }

    pub fn ask_count(&mut self, question: &str) -> Result<usize> {
        let answer = self.ask(question)?;
        positive_count(&answer).map_err(Error::Input)
    }

    pub fn ask_words(&mut self, question: &str) -> Result<Vec<String>> {
        let answer = self.ask(question)?;
        Ok(answer.split_whitespace().map(String::from).collect())
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Parses a count of at least one; also used for `--top`
pub fn positive_count(value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(format!("'{}' is not a positive number", value)),
    }
}
