use async_trait::async_trait;
use reqwest::Client;
use vacancy_analyzer::{Listing, Site};

use crate::api::{get_json, Result, VacancySource};
use crate::hh::types::ApiResponse;

/// Public vacancy search of hh.ru, no credential required
pub struct HeadHunter {
    client: Client,
    base_url: String,
}

impl HeadHunter {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/vacancies?text={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn site(&self) -> Site {
        Site::HeadHunter
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Listing>> {
        let url = self.search_url(query);
        let resp: ApiResponse = get_json(self.client.get(&url), &url, Site::HeadHunter).await?;
        log::info!(
            "retrieved {} vacancies from hh.ru for query: {}",
            resp.items.len(),
            query
        );
        Ok(resp.items.into_iter().map(Listing::from).collect())
    }
}
