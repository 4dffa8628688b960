use async_trait::async_trait;
use reqwest::Client;
use vacancy_analyzer::{Listing, Site};

use crate::api::{get_json, Result, VacancySource};
use crate::superjob::types::ApiResponse;

const APP_KEY_HEADER: &str = "X-Api-App-Id";

/// Vacancy search of superjob.ru, authenticated with a static app key
pub struct SuperJob {
    client: Client,
    base_url: String,
    app_key: String,
}

impl SuperJob {
    pub fn new(client: Client, base_url: &str, app_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            app_key,
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/vacancies/?keyword={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn site(&self) -> Site {
        Site::SuperJob
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Listing>> {
        let url = self.search_url(query);
        let request = self.client.get(&url).header(APP_KEY_HEADER, &self.app_key);
        let resp: ApiResponse = get_json(request, &url, Site::SuperJob).await?;
        log::info!(
            "retrieved {} vacancies from superjob.ru for query: {}",
            resp.objects.len(),
            query
        );
        Ok(resp.objects.into_iter().map(Listing::from).collect())
    }
}

#[cfg(test)]
mod test {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::api::Error;

    fn source(server: &mockito::Server) -> SuperJob {
        SuperJob::new(Client::new(), &server.url(), "secret-key".to_owned())
    }

    #[tokio::test]
    async fn test_fetch_sends_key_and_maps_objects() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/vacancies/")
            .match_header(APP_KEY_HEADER, "secret-key")
            .match_query(Matcher::UrlEncoded("keyword".into(), "python developer".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "objects": [
                        {
                            "profession": "Python developer",
                            "link": "https://www.superjob.ru/vakansii/1.html",
                            "payment_from": 120000,
                            "payment_to": 0,
                            "currency": "rub",
                            "candidat": "Django, PostgreSQL"
                        },
                        {
                            "profession": "Data engineer",
                            "link": "https://www.superjob.ru/vakansii/2.html",
                            "payment_from": 0,
                            "payment_to": 0,
                            "currency": "rub",
                            "candidat": null
                        }
                    ],
                    "total": 2,
                    "more": false
                })
                .to_string(),
            )
            .create_async()
            .await;

        let listings = source(&server)
            .fetch("python developer")
            .await
            .expect("Fetch failed");
        mock.assert_async().await;

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].site, Site::SuperJob);
        assert_eq!(listings[0].title, "Python developer");
        assert_eq!(listings[0].profession.as_deref(), Some("Python developer"));
        assert_eq!(listings[0].url, "https://www.superjob.ru/vakansii/1.html");
        assert_eq!(listings[0].salary, "120000 RUB");
        assert_eq!(listings[0].requirement.as_deref(), Some("Django, PostgreSQL"));
        assert_eq!(listings[1].salary, "");
        assert_eq!(listings[1].description, "");
    }

    #[tokio::test]
    async fn test_fetch_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(json!({"error": {"message": "invalid app key"}}).to_string())
            .create_async()
            .await;

        let result = source(&server).fetch("rust").await;
        assert!(
            matches!(result, Err(Error::RequestNotOk { status: 401, .. })),
            "Expected RequestNotOk, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_is_mapping_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"items": []}).to_string())
            .create_async()
            .await;

        let result = source(&server).fetch("rust").await;
        assert!(
            matches!(result, Err(Error::Mapping { site: Site::SuperJob, .. })),
            "Expected mapping error, got {:?}",
            result
        );
    }
}
