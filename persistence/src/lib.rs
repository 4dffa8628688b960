use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;
use vacancy_analyzer::models::same_url;
use vacancy_analyzer::pipeline::{dedupe_by_url, sort_by_salary_range};
use vacancy_analyzer::{SalaryRange, Vacancy};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File error: '{0}'")]
    Io(#[from] io::Error),
    #[error("Malformed vacancy file: '{0}'")]
    Json(#[from] serde_json::Error),
    #[error("Vacancy not found: '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Salary(#[from] vacancy_analyzer::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
    Skipped,
}

/// Vacancies kept in a single JSON file, keyed by url.
///
/// Every operation reads the whole file and every mutation rewrites it.
/// There is no locking: two processes writing the same file race and the
/// last writer wins.
pub struct VacancyStore {
    path: PathBuf,
}

impl VacancyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored vacancies in file order. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Vacancy>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, store is empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, vacancies: &[Vacancy]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        vacancies.serialize(&mut serializer)?;
        buf.push(b'\n');
        fs::write(&self.path, buf)?;
        log::debug!(
            "wrote {} vacancies to {}",
            vacancies.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Loads the store, lets `f` mutate it and writes it back.
    /// The file is only rewritten when `f` succeeds and actually changed something.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Vacancy>) -> Result<T>,
    {
        let mut vacancies = self.load()?;
        let before = vacancies.clone();
        let result = f(&mut vacancies)?;
        if vacancies != before {
            self.save(&vacancies)?;
        }
        Ok(result)
    }

    /// Inserts `vacancy` unless its url is already stored.
    /// With `overwrite` an existing record is replaced in place.
    pub fn add(&self, vacancy: &Vacancy, overwrite: bool) -> Result<AddOutcome> {
        self.transaction(|vacancies| Ok(upsert(vacancies, vacancy, overwrite)))
    }

    /// Same as [`VacancyStore::add`] for many vacancies, in a single rewrite.
    /// Returns how many records were added or replaced.
    pub fn add_all<'a, I>(&self, new: I, overwrite: bool) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Vacancy>,
    {
        self.transaction(|vacancies| {
            let changed = new
                .into_iter()
                .map(|vacancy| upsert(vacancies, vacancy, overwrite))
                .filter(|outcome| *outcome != AddOutcome::Skipped)
                .count();
            Ok(changed)
        })
    }

    /// Replaces the stored record that has the same url as `vacancy`
    pub fn update(&self, vacancy: &Vacancy) -> Result<()> {
        self.transaction(|vacancies| {
            let stored = vacancies
                .iter_mut()
                .find(|v| same_url(v, vacancy))
                .ok_or_else(|| Error::NotFound(vacancy.url.clone()))?;
            *stored = vacancy.clone();
            Ok(())
        })
    }

    pub fn delete(&self, vacancy: &Vacancy) -> Result<()> {
        self.delete_by_url(&vacancy.url)
    }

    /// Removes the first record stored under `url`
    pub fn delete_by_url(&self, url: &str) -> Result<()> {
        self.transaction(|vacancies| {
            let idx = vacancies
                .iter()
                .position(|v| v.url == url)
                .ok_or_else(|| Error::NotFound(url.to_owned()))?;
            vacancies.remove(idx);
            Ok(())
        })?;
        log::info!("deleted vacancy {}", url);
        Ok(())
    }

    /// Stored vacancies whose salary range overlaps `range`, highest salary first.
    /// Vacancies without a known salary never match.
    pub fn query_by_salary(&self, range: &str) -> Result<Vec<Vacancy>> {
        let wanted = SalaryRange::parse(range)?;
        let matched = self
            .load()?
            .into_iter()
            .map(|v| (v.salary_range(), v))
            .filter(|(salary, _)| salary.overlaps(&wanted))
            .collect();
        Ok(sort_by_salary_range(matched))
    }

    /// Drops records repeating an earlier url. Returns the number removed.
    pub fn dedupe(&self) -> Result<usize> {
        self.transaction(|vacancies| {
            let total = vacancies.len();
            *vacancies = dedupe_by_url(std::mem::take(vacancies));
            Ok(total - vacancies.len())
        })
    }
}

fn upsert(vacancies: &mut Vec<Vacancy>, vacancy: &Vacancy, overwrite: bool) -> AddOutcome {
    match vacancies.iter().position(|v| same_url(v, vacancy)) {
        Some(_) if !overwrite => AddOutcome::Skipped,
        Some(idx) => {
            vacancies[idx] = vacancy.clone();
            AddOutcome::Replaced
        }
        None => {
            vacancies.push(vacancy.clone());
            AddOutcome::Added
        }
    }
}
