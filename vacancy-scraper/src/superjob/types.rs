use serde::{Deserialize, Serialize};
use vacancy_analyzer::{Listing, Site};

use crate::api::salary_text;

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Object {
    profession: String,
    link: String,
    #[serde(default)]
    payment_from: Option<u64>,
    #[serde(default)]
    payment_to: Option<u64>,
    currency: Option<String>,
    candidat: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Object>,
}

impl From<Object> for Listing {
    fn from(object: Object) -> Self {
        // superjob reports a missing bound as 0
        let from = object.payment_from.filter(|p| *p > 0);
        let to = object.payment_to.filter(|p| *p > 0);
        Listing {
            site: Site::SuperJob,
            title: object.profession.clone(),
            url: object.link,
            salary: salary_text(from, to, object.currency.as_deref()),
            description: object.candidat.clone().unwrap_or_default(),
            profession: Some(object.profession),
            requirement: object.candidat,
        }
    }
}
