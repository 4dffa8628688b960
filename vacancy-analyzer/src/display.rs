use std::io::{self, Write};

use crate::api::DisplaySink;
use crate::Vacancy;

pub const NO_RESULTS: &str = "No vacancies match the given criteria.";

/// Prints numbered vacancies to any writer, stdout by default
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn show(&mut self, vacancies: &[Vacancy]) -> io::Result<()> {
        if vacancies.is_empty() {
            writeln!(self.out, "{}", NO_RESULTS)?;
            return self.out.flush();
        }
        for (idx, vacancy) in vacancies.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, vacancy.title)?;
            writeln!(self.out, "   Link: {}", vacancy.url)?;
            writeln!(self.out, "   Salary: {}", vacancy.salary)?;
            writeln!(self.out, "   Description: {}\n", vacancy.description)?;
        }
        self.out.flush()
    }
}
