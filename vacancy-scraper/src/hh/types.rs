use serde::{Deserialize, Serialize};
use vacancy_analyzer::{Listing, Site};

use crate::api::salary_text;

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Salary {
    from: Option<u64>,
    to: Option<u64>,
    currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Snippet {
    requirement: Option<String>,
    responsibility: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Item {
    name: String,
    alternate_url: String,
    salary: Option<Salary>,
    snippet: Option<Snippet>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Item>,
}

/// Snippets come with search highlighting markup
fn strip_highlight(text: &str) -> String {
    text.replace("<highlighttext>", "")
        .replace("</highlighttext>", "")
}

impl From<Item> for Listing {
    fn from(item: Item) -> Self {
        let salary = item
            .salary
            .map(|s| salary_text(s.from, s.to, s.currency.as_deref()))
            .unwrap_or_default();
        let (requirement, description) = match item.snippet {
            Some(snippet) => (
                snippet.requirement.as_deref().map(strip_highlight),
                snippet
                    .responsibility
                    .as_deref()
                    .map(strip_highlight)
                    .unwrap_or_default(),
            ),
            None => (None, String::new()),
        };
        Listing {
            site: Site::HeadHunter,
            title: item.name,
            url: item.alternate_url,
            salary,
            description,
            profession: None,
            requirement,
        }
    }
}
