use std::path::PathBuf;

use vacancy_scraper::api::{
    SourceConfig, DEFAULT_HH_BASE_URL, DEFAULT_SUPERJOB_BASE_URL, DEFAULT_USER_AGENT,
};

pub const DEFAULT_VACANCIES_FILE: &str = "vacancies.json";

/// Settings read once at startup and handed to whatever needs them
#[derive(Debug, Clone)]
pub struct Config {
    pub vacancies_file: PathBuf,
    pub sources: SourceConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            vacancies_file: var("VACANCIES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VACANCIES_FILE)),
            sources: SourceConfig {
                hh_base_url: var("HH_BASE_URL").unwrap_or_else(|| DEFAULT_HH_BASE_URL.to_owned()),
                superjob_base_url: var("SUPERJOB_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_SUPERJOB_BASE_URL.to_owned()),
                superjob_api_key: var("SUPERJOB_API_KEY"),
                user_agent: var("VACANCIES_USER_AGENT")
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            },
        }
    }
}
