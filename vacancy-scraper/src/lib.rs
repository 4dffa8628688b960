pub mod api;
pub mod hh;
pub mod superjob;

pub use api::{Error, Result, SourceConfig, VacancySource};
pub use vacancy_analyzer::{Listing, Site};

/// Builds the source for `site` from the given configuration
pub fn source_for(site: Site, config: &SourceConfig) -> Result<Box<dyn VacancySource>> {
    let client = config.client()?;
    let source: Box<dyn VacancySource> = match site {
        Site::HeadHunter => Box::new(hh::HeadHunter::new(client, &config.hh_base_url)),
        Site::SuperJob => {
            let app_key = config
                .superjob_api_key
                .clone()
                .ok_or(Error::MissingCredential(Site::SuperJob))?;
            Box::new(superjob::SuperJob::new(
                client,
                &config.superjob_base_url,
                app_key,
            ))
        }
    };
    Ok(source)
}
