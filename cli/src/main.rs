mod config;
mod prompt;
mod search;
mod store;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use persistence::VacancyStore;
use thiserror::Error;
use vacancy_analyzer::display::ConsoleDisplay;

use crate::config::Config;
use crate::prompt::Prompter;
use crate::search::{select_sources, SearchArgs};
use crate::store::VacancyChanges;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Source(#[from] vacancy_scraper::Error),
    #[error(transparent)]
    Store(#[from] persistence::Error),
    #[error(transparent)]
    Analyzer(#[from] vacancy_analyzer::Error),
    #[error("Console error: '{0}'")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

#[derive(Parser)]
#[command(name = "vacancies", author, version, about, long_about = None)]
struct Cli {
    /// Job boards to search (hh, superjob), all of them when omitted
    #[clap(long)]
    site: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the job boards, asking for anything not passed as a flag
    Search {
        #[arg(long)]
        query: Option<String>,
        /// Number of vacancies to show
        #[arg(long, value_parser = prompt::positive_count)]
        top: Option<usize>,
        /// Keep vacancies mentioning any of these words
        #[arg(long, num_args = 0..)]
        keywords: Option<Vec<String>>,
        /// Keep vacancies paying at least this much
        #[arg(long)]
        min_salary: Option<u64>,
        /// Save matched vacancies without asking
        #[arg(long)]
        save: bool,
    },
    /// Show all saved vacancies
    List {},
    /// Show saved vacancies whose salary overlaps a range like 100000-150000
    Query {
        #[arg(long)]
        salary: String,
    },
    /// Change fields of a saved vacancy, found by its url
    Edit {
        #[arg(long)]
        url: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a saved vacancy by its url
    Delete {
        #[arg(long)]
        url: String,
    },
    /// Remove saved vacancies stored more than once
    Fix {},
}

async fn run(args: Cli, config: Config) -> Result<()> {
    let store = VacancyStore::new(&config.vacancies_file);
    let mut display = ConsoleDisplay::stdout();
    match args.command {
        Commands::Search {
            query,
            top,
            keywords,
            min_salary,
            save,
        } => {
            let sources = select_sources(&args.site, &config.sources)?;
            let search_args = SearchArgs {
                query,
                top,
                keywords,
                min_salary,
                save,
            };
            let mut prompter = Prompter::stdio();
            search::search(&sources, &store, &mut prompter, &mut display, search_args).await
        }
        Commands::List {} => store::list(&store, &mut display),
        Commands::Query { salary } => store::query(&store, &mut display, &salary),
        Commands::Edit {
            url,
            title,
            salary,
            description,
        } => {
            let changes = VacancyChanges {
                title,
                salary,
                description,
            };
            store::edit(&store, &url, changes)
        }
        Commands::Delete { url } => store::delete(&store, &url),
        Commands::Fix {} => store::fix(&store),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = Config::from_env();
    log::debug!("using vacancy file {}", config.vacancies_file.display());
    if let Err(e) = run(args, config).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let args = Cli::parse_from([
            "vacancies", "--site", "hh", "--site", "sj", "search", "--query", "rust", "--top",
            "5", "--keywords", "tokio", "axum", "--min-salary", "150000", "--save",
        ]);
        assert_eq!(args.site, vec!["hh", "sj"]);
        match args.command {
            Commands::Search {
                query,
                top,
                keywords,
                min_salary,
                save,
            } => {
                assert_eq!(query.as_deref(), Some("rust"));
                assert_eq!(top, Some(5));
                assert_eq!(keywords, Some(vec!["tokio".to_owned(), "axum".to_owned()]));
                assert_eq!(min_salary, Some(150000));
                assert!(save);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_store_commands() {
        let args = Cli::parse_from(["vacancies", "query", "--salary", "100000-150000"]);
        assert!(matches!(args.command, Commands::Query { salary } if salary == "100000-150000"));
        let args = Cli::parse_from(["vacancies", "delete", "--url", "http://x/1"]);
        assert!(matches!(args.command, Commands::Delete { url } if url == "http://x/1"));
    }

    #[test]
    fn test_parse_edit() {
        let args = Cli::parse_from([
            "vacancies", "edit", "--url", "http://x/1", "--salary", "150000-200000",
        ]);
        match args.command {
            Commands::Edit {
                url,
                title,
                salary,
                description,
            } => {
                assert_eq!(url, "http://x/1");
                assert_eq!(title, None);
                assert_eq!(salary.as_deref(), Some("150000-200000"));
                assert_eq!(description, None);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["vacancies", "edit", "--title", "Dev"]).is_err());
    }

    #[test]
    fn test_top_must_be_positive() {
        assert!(Cli::try_parse_from(["vacancies", "search", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["vacancies", "search", "--top", "-1"]).is_err());
        assert!(Cli::try_parse_from(["vacancies", "search", "--top", "1"]).is_ok());
    }
}
