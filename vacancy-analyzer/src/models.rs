use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::salary::SalaryRange;
use crate::types::Error;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    HeadHunter,
    SuperJob,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::HeadHunter, Site::SuperJob];
}

impl FromStr for Site {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hh" | "hh.ru" | "headhunter" => Ok(Site::HeadHunter),
            "s" | "sj" | "superjob" | "superjob.ru" => Ok(Site::SuperJob),
            _ => Err(Error::UnknownSite(s.to_owned())),
        }
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let domain = match self {
            Site::HeadHunter => "hh.ru",
            Site::SuperJob => "superjob.ru",
        };
        write!(f, "{}", domain)
    }
}

/// A listing as returned by a job board, already mapped into a common shape.
/// `profession` and `requirement` are only used for keyword matching.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub site: Site,
    pub title: String,
    pub url: String,
    pub salary: String,
    pub description: String,
    pub profession: Option<String>,
    pub requirement: Option<String>,
}

impl Listing {
    pub fn into_vacancy(self) -> Vacancy {
        Vacancy::new(self.title, self.url, self.salary, self.description)
    }
}

/// A persisted job posting. `url` is the natural key.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    pub title: String,
    pub url: String,
    /// Raw salary text as the job board reported it, possibly empty
    pub salary: String,
    pub description: String,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            salary: salary.into(),
            description: description.into(),
        }
    }

    /// Parsed salary. A salary that cannot be parsed counts as unknown.
    pub fn salary_range(&self) -> SalaryRange {
        match SalaryRange::parse(&self.salary) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("treating salary of {} as unknown: {}", self.url, e);
                SalaryRange::unknown()
            }
        }
    }
}

/// Orders salaries by their maximum, highest first. Unknown maxima go last.
pub fn by_salary_desc(a: &SalaryRange, b: &SalaryRange) -> Ordering {
    match (a.max, b.max) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn same_url(a: &Vacancy, b: &Vacancy) -> bool {
    a.url == b.url
}
