use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unparseable salary: '{0}'")]
    UnparseableSalary(String),
    #[error("Unknown site: '{0}'")]
    UnknownSite(String),
}
