use std::io::{BufRead, Write};

use persistence::VacancyStore;
use vacancy_analyzer::api::DisplaySink;
use vacancy_analyzer::pipeline;
use vacancy_analyzer::Site;
use vacancy_scraper::{source_for, SourceConfig, VacancySource};

use crate::prompt::Prompter;
use crate::{Error, Result};

/// Values given on the command line; anything missing is asked for
#[derive(Debug, Default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub top: Option<usize>,
    pub keywords: Option<Vec<String>>,
    /// Drop vacancies whose salary maximum is below this or unknown
    pub min_salary: Option<u64>,
    pub save: bool,
}

/// Builds the sources for the requested sites.
/// Without an explicit selection every site is used, except SuperJob when no
/// app key is configured.
pub fn select_sources(
    sites: &[String],
    config: &SourceConfig,
) -> Result<Vec<Box<dyn VacancySource>>> {
    if sites.is_empty() {
        let sources = Site::ALL
            .into_iter()
            .filter(|site| {
                let usable = *site != Site::SuperJob || config.superjob_api_key.is_some();
                if !usable {
                    log::warn!("SUPERJOB_API_KEY is not set, skipping {}", site);
                }
                usable
            })
            .map(|site| source_for(site, config))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        return Ok(sources);
    }
    let mut sources = Vec::with_capacity(sites.len());
    for site in sites {
        let site: Site = site.parse()?;
        sources.push(source_for(site, config)?);
    }
    Ok(sources)
}

pub async fn search<R, W, D>(
    sources: &[Box<dyn VacancySource>],
    store: &VacancyStore,
    prompter: &mut Prompter<R, W>,
    display: &mut D,
    args: SearchArgs,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    D: DisplaySink,
{
    let query = match args.query {
        Some(query) => query,
        None => prompter.ask("Enter a search query: ")?,
    };
    let top = match args.top {
        Some(top) => top,
        None => prompter.ask_count("How many vacancies to show (top N): ")?,
    };
    if top == 0 {
        return Err(Error::Input("the number of vacancies to show must be positive".to_owned()));
    }
    let keywords = match args.keywords {
        Some(keywords) => keywords,
        None => prompter.ask_words("Enter keywords to filter vacancies by: ")?,
    };

    let mut listings = Vec::new();
    for source in sources {
        log::info!("searching {} for: {}", source.site(), query);
        listings.extend(source.fetch(&query).await?);
    }

    let mut outcome = pipeline::search(listings, &keywords, top);
    if let Some(floor) = args.min_salary {
        outcome.matched = pipeline::filter_by_min_salary(outcome.matched, floor);
        outcome.top = pipeline::top_n(&outcome.matched, top);
        log::info!(
            "{} matched vacancies pay at least {}",
            outcome.matched.len(),
            floor
        );
    }
    display.show(&outcome.top)?;

    if outcome.matched.is_empty() {
        return Ok(());
    }
    let save = args.save || prompter.confirm("Save vacancies to file? (y/n): ")?;
    if save {
        let added = store.add_all(&outcome.matched, false)?;
        log::info!(
            "saved {} new of {} matched vacancies to {}",
            added,
            outcome.matched.len(),
            store.path().display()
        );
        println!("Vacancies saved to {}", store.path().display());
    }
    Ok(())
}
