use persistence::VacancyStore;
use vacancy_analyzer::api::DisplaySink;
use vacancy_analyzer::SalaryRange;

use crate::{Error, Result};

/// Fields to overwrite on a saved vacancy, `None` keeps the stored value
#[derive(Debug, Default)]
pub struct VacancyChanges {
    pub title: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
}

impl VacancyChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.description.is_none()
    }
}

pub fn list<D: DisplaySink>(store: &VacancyStore, display: &mut D) -> Result<()> {
    let vacancies = store.load()?;
    log::info!(
        "{} vacancies stored in {}",
        vacancies.len(),
        store.path().display()
    );
    display.show(&vacancies)?;
    Ok(())
}

pub fn query<D: DisplaySink>(store: &VacancyStore, display: &mut D, salary: &str) -> Result<()> {
    let vacancies = store.query_by_salary(salary)?;
    log::info!("{} stored vacancies overlap salary {}", vacancies.len(), salary);
    display.show(&vacancies)?;
    Ok(())
}

pub fn delete(store: &VacancyStore, url: &str) -> Result<()> {
    store.delete_by_url(url)?;
    println!("Deleted {}", url);
    Ok(())
}

/// Edits the vacancy saved under `url`. A new salary has to parse.
pub fn edit(store: &VacancyStore, url: &str, changes: VacancyChanges) -> Result<()> {
    if changes.is_empty() {
        return Err(Error::Input(
            "nothing to edit, pass --title, --salary or --description".to_owned(),
        ));
    }
    if let Some(salary) = &changes.salary {
        SalaryRange::parse(salary)?;
    }
    let mut vacancy = store
        .load()?
        .into_iter()
        .find(|v| v.url == url)
        .ok_or_else(|| persistence::Error::NotFound(url.to_owned()))?;
    if let Some(title) = changes.title {
        vacancy.title = title;
    }
    if let Some(salary) = changes.salary {
        vacancy.salary = salary;
    }
    if let Some(description) = changes.description {
        vacancy.description = description;
    }
    store.update(&vacancy)?;
    log::info!("edited vacancy {}", url);
    println!("Updated {}", url);
    Ok(())
}

/// Removes records that were stored twice under the same url
pub fn fix(store: &VacancyStore) -> Result<()> {
    let removed = store.dedupe()?;
    log::info!("Deleting {} duplicated vacancies", removed);
    println!("Removed {} duplicated vacancies", removed);
    Ok(())
}
