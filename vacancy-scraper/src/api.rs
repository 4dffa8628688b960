use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use vacancy_analyzer::{Listing, Site};

pub const DEFAULT_HH_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_SUPERJOB_BASE_URL: &str = "https://api.superjob.ru/2.0";
pub const DEFAULT_USER_AGENT: &str = "vacancies-cli/0.1 (vacancy aggregator)";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch vacancies from: '{url}', status: {status}")]
    RequestNotOk { url: String, status: u16 },
    #[error("Unexpected response shape from {site}: {reason}")]
    Mapping { site: Site, reason: String },
    #[error("No credential configured for {0}")]
    MissingCredential(Site),
}

/// A job board that can be searched for vacancies
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn site(&self) -> Site;

    /// Listings of the first result page for `query`
    async fn fetch(&self, query: &str) -> Result<Vec<Listing>>;
}

/// Connection settings shared by all sources
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub hh_base_url: String,
    pub superjob_base_url: String,
    pub superjob_api_key: Option<String>,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            hh_base_url: DEFAULT_HH_BASE_URL.to_owned(),
            superjob_base_url: DEFAULT_SUPERJOB_BASE_URL.to_owned(),
            superjob_api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl SourceConfig {
    pub fn client(&self) -> Result<Client> {
        let client = Client::builder().user_agent(&self.user_agent).build()?;
        Ok(client)
    }
}

/// Sends `request`, rejects non-success statuses and decodes the body as `T`
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
    site: Site,
) -> Result<T> {
    log::debug!("requesting vacancies from {}, url: {}", site, url);
    let resp = request.header("Accept", "application/json").send().await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "failed to retrieve vacancies from {}, status: {}, error resp body: {:?}",
            site,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| Error::Mapping {
        site,
        reason: e.to_string(),
    })
}

/// Renders salary bounds the way a vacancy stores them: `from-to CUR`,
/// a single bound, or an empty string when neither bound is known
pub(crate) fn salary_text(from: Option<u64>, to: Option<u64>, currency: Option<&str>) -> String {
    let amount = match (from, to) {
        (Some(from), Some(to)) => format!("{}-{}", from, to),
        (Some(value), None) | (None, Some(value)) => value.to_string(),
        (None, None) => return String::new(),
    };
    match currency.map(str::trim).filter(|c| !c.is_empty()) {
        Some(currency) => format!("{} {}", amount, currency.to_uppercase()),
        None => amount,
    }
}
