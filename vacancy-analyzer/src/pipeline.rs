use std::collections::HashSet;

use crate::models::{by_salary_desc, Listing, Vacancy};
use crate::salary::SalaryRange;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Every listing that matched the keywords, sorted by salary
    pub matched: Vec<Vacancy>,
    /// Prefix of `matched` that is shown to the user
    pub top: Vec<Vacancy>,
}

/// Keeps listings where any keyword occurs (case-insensitive) in the title,
/// the profession or the requirement snippet.
///
/// An empty keyword list, or one made only of blank words, is treated as no
/// filter at all and keeps every listing.
pub fn filter_by_keywords(listings: Vec<Listing>, keywords: &[String]) -> Vec<Vacancy> {
    let keywords = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>();
    listings
        .into_iter()
        .filter(|listing| keywords.is_empty() || matches_any(listing, &keywords))
        .map(Listing::into_vacancy)
        .collect()
}

fn matches_any(listing: &Listing, keywords: &[String]) -> bool {
    let title = listing.title.to_lowercase();
    let profession = listing.profession.as_deref().map(str::to_lowercase);
    let requirement = listing.requirement.as_deref().map(str::to_lowercase);
    keywords.iter().any(|word| {
        title.contains(word.as_str())
            || profession.as_deref().is_some_and(|p| p.contains(word.as_str()))
            || requirement.as_deref().is_some_and(|r| r.contains(word.as_str()))
    })
}

/// Stable sort by parsed salary maximum, highest first, unknown salaries last.
pub fn sort_descending_by_salary(vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    sort_by_salary_range(
        vacancies
            .into_iter()
            .map(|v| (v.salary_range(), v))
            .collect(),
    )
}

/// Same order as [`sort_descending_by_salary`] for records whose salary is already parsed
pub fn sort_by_salary_range(mut keyed: Vec<(SalaryRange, Vacancy)>) -> Vec<Vacancy> {
    keyed.sort_by(|(a, _), (b, _)| by_salary_desc(a, b));
    keyed.into_iter().map(|(_, v)| v).collect()
}

pub fn top_n(vacancies: &[Vacancy], n: usize) -> Vec<Vacancy> {
    vacancies.iter().take(n).cloned().collect()
}

/// Keeps records whose parsed maximum reaches `floor`.
pub fn filter_by_min_salary(vacancies: Vec<Vacancy>, floor: u64) -> Vec<Vacancy> {
    vacancies
        .into_iter()
        .filter(|v| v.salary_range().max.is_some_and(|max| max >= floor))
        .collect()
}

/// Keeps the first record for every url, in order.
pub fn dedupe_by_url(vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    let mut seen = HashSet::new();
    vacancies
        .into_iter()
        .filter(|v| seen.insert(v.url.clone()))
        .collect()
}

pub fn search(listings: Vec<Listing>, keywords: &[String], n: usize) -> SearchOutcome {
    let total = listings.len();
    let matched = sort_descending_by_salary(dedupe_by_url(filter_by_keywords(listings, keywords)));
    log::info!(
        "{} of {} listings matched keywords {:?}",
        matched.len(),
        total,
        keywords
    );
    let top = top_n(&matched, n);
    SearchOutcome { matched, top }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Site;

    fn listing(title: &str, url: &str, salary: &str) -> Listing {
        Listing {
            site: Site::HeadHunter,
            title: title.to_owned(),
            url: url.to_owned(),
            salary: salary.to_owned(),
            description: String::new(),
            profession: None,
            requirement: None,
        }
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn urls(vacancies: &[Vacancy]) -> Vec<&str> {
        vacancies.iter().map(|v| v.url.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_title_case_insensitive() {
        let listings = vec![
            listing("Senior RUST developer", "1", ""),
            listing("Java developer", "2", ""),
        ];
        let result = filter_by_keywords(listings, &keywords(&["rust"]));
        assert_eq!(urls(&result), vec!["1"]);
    }

    #[test]
    fn test_filter_matches_optional_fields() {
        let mut by_profession = listing("Engineer", "1", "");
        by_profession.profession = Some("Backend Python".to_owned());
        let mut by_requirement = listing("Engineer", "2", "");
        by_requirement.requirement = Some("Experience with PYTHON 3".to_owned());
        let neither = listing("Engineer", "3", "");
        let result = filter_by_keywords(
            vec![by_profession, by_requirement, neither],
            &keywords(&["go", "python"]),
        );
        assert_eq!(urls(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_without_keywords_keeps_all() {
        let listings = vec![listing("a", "1", ""), listing("b", "2", "")];
        assert_eq!(filter_by_keywords(listings.clone(), &[]).len(), 2);
        assert_eq!(filter_by_keywords(listings, &keywords(&["  "])).len(), 2);
    }

    #[test]
    fn test_sort_descending_is_stable_with_unknown_last() {
        let vacancies = vec![
            Vacancy::new("a", "1", "", ""),
            Vacancy::new("b", "2", "100-200", ""),
            Vacancy::new("c", "3", "300", ""),
            Vacancy::new("d", "4", "negotiable", ""),
            Vacancy::new("e", "5", "150-200 USD", ""),
        ];
        let sorted = sort_descending_by_salary(vacancies);
        assert_eq!(urls(&sorted), vec!["3", "2", "5", "1", "4"]);
    }

    #[test]
    fn test_sort_by_salary_range_uses_given_ranges() {
        let keyed = vec![
            (SalaryRange::unknown(), Vacancy::new("a", "1", "900", "")),
            (SalaryRange::new(1, 2, None), Vacancy::new("b", "2", "", "")),
            (SalaryRange::new(5, 10, None), Vacancy::new("c", "3", "", "")),
        ];
        assert_eq!(urls(&sort_by_salary_range(keyed)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_top_n_is_prefix_of_sorted() {
        let sorted = sort_descending_by_salary(vec![
            Vacancy::new("a", "1", "10", ""),
            Vacancy::new("b", "2", "30", ""),
            Vacancy::new("c", "3", "20", ""),
        ]);
        for n in 0..6 {
            let top = top_n(&sorted, n);
            assert_eq!(top.len(), n.min(sorted.len()));
            assert_eq!(top.as_slice(), &sorted[..top.len()]);
        }
    }

    #[test]
    fn test_filter_by_min_salary() {
        let vacancies = vec![
            Vacancy::new("a", "1", "50000-90000", ""),
            Vacancy::new("b", "2", "100000", ""),
            Vacancy::new("c", "3", "", ""),
        ];
        let result = filter_by_min_salary(vacancies, 90000);
        assert_eq!(urls(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_dedupe_by_url_keeps_first() {
        let vacancies = vec![
            Vacancy::new("first", "1", "", ""),
            Vacancy::new("b", "2", "", ""),
            Vacancy::new("second", "1", "", ""),
        ];
        let result = dedupe_by_url(vacancies);
        assert_eq!(urls(&result), vec!["1", "2"]);
        assert_eq!(result[0].title, "first");
    }

    #[test]
    fn test_search() {
        let listings = vec![
            listing("Rust dev", "1", "100-200"),
            listing("Go dev", "2", "300"),
            listing("Rust lead", "3", "500"),
            listing("Rust dev", "1", "100-200"),
        ];
        let outcome = search(listings, &keywords(&["rust"]), 1);
        assert_eq!(urls(&outcome.matched), vec!["3", "1"]);
        assert_eq!(urls(&outcome.top), vec!["3"]);
    }
}
