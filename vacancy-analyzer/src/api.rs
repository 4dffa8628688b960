use std::io;

use crate::Vacancy;

/// Renders a sequence of vacancies to a user
pub trait DisplaySink {
    fn show(&mut self, vacancies: &[Vacancy]) -> io::Result<()>;
}
