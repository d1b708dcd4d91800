//! Citation assembly, one function per style.
//!
//! Optional clauses are dropped when the record lacks the field; their order is fixed per style.
//! Asterisks mark italics and are part of the output; rendering them is up to the caller.

use crate::{article::ArticleRecord, date::format_date, journal::Journal, names};

/// Author segment followed by `sep`, or nothing at all when there are no authors. A segment that
/// already ends in a period (`et al.`) does not get a second one.
fn lead(authors: String, sep: &str) -> String {
    if authors.is_empty() {
        return authors;
    }
    match sep.strip_prefix('.') {
        Some(rest) if authors.ends_with('.') => authors + rest,
        _ => authors + sep,
    }
}

/// Close the citation with a period unless it already ends in one (`n.d.`).
fn terminate(mut out: String) -> String {
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

/// `Doe, J. (2023). Title. *Journal*, *4*(2), 10-20. https://doi.org/…`
pub fn apa(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    let mut out = format!(
        "{}({year}). {}. *{}*",
        lead(names::apa(&article.authors), " "),
        article.title,
        journal.name
    );
    if let Some(volume) = article.volume_designator() {
        out.push_str(&format!(", *{volume}*"));
        if let Some(issue) = article.issue() {
            out.push_str(&format!("({issue})"));
        }
    }
    if let Some(pages) = article.pages() {
        out.push_str(&format!(", {pages}"));
    }
    if let Some(doi) = article.doi() {
        out.push_str(&format!(". https://doi.org/{doi}"));
    }
    out
}

/// `Doe, Jane. "Title" *Journal*, vol. 4, no. 2, 2023, pp. 10-20. DOI: ….`
pub fn mla(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    let mut out = format!(
        "{}\"{}\" *{}*",
        lead(names::mla(&article.authors), ". "),
        article.title,
        journal.name
    );
    if let Some(volume) = article.volume_designator() {
        out.push_str(&format!(", vol. {volume}"));
        if let Some(issue) = article.issue() {
            out.push_str(&format!(", no. {issue}"));
        }
    }
    out.push_str(&format!(", {year}"));
    if let Some(pages) = article.pages() {
        out.push_str(&format!(", pp. {pages}"));
    }
    if let Some(doi) = article.doi() {
        out.push_str(&format!(". DOI: {doi}"));
    }
    terminate(out)
}

/// `Doe, Jane. "Title" *Journal* 4, no. 2 (2023): 10-20. https://doi.org/….`
pub fn chicago(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    let mut out = format!(
        "{}\"{}\" *{}*",
        lead(names::chicago(&article.authors), ". "),
        article.title,
        journal.name
    );
    if let Some(volume) = article.volume_designator() {
        out.push_str(&format!(" {volume}"));
        if let Some(issue) = article.issue() {
            out.push_str(&format!(", no. {issue}"));
        }
    }
    out.push_str(&format!(" ({year})"));
    if let Some(pages) = article.pages() {
        out.push_str(&format!(": {pages}"));
    }
    if let Some(doi) = article.doi() {
        out.push_str(&format!(". https://doi.org/{doi}"));
    }
    terminate(out)
}

/// `Doe J. Title. Adv Med Health Sci J. 2023;4(2):10-20. doi:….`
pub fn vancouver(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    let mut out = format!(
        "{}{}. {}. {year}",
        lead(names::vancouver(&article.authors), ". "),
        article.title,
        journal.abbreviation
    );
    if let Some(volume) = article.volume_designator() {
        out.push_str(&format!(";{volume}"));
        if let Some(issue) = article.issue() {
            out.push_str(&format!("({issue})"));
        }
    }
    if let Some(pages) = article.pages() {
        out.push_str(&format!(":{pages}"));
    }
    if let Some(doi) = article.doi() {
        out.push_str(&format!(". doi:{doi}"));
    }
    terminate(out)
}

/// Cite key: the lead author's surname, lowercased and without whitespace, then the year.
fn bibtex_key(article: &ArticleRecord, year: &str) -> String {
    let surname = article
        .authors
        .first()
        .map(|a| a.last_name.split_whitespace().collect::<String>().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "article".to_string());
    format!("{surname}{year}")
}

/// An `@article` entry. Absent optional fields are left out entirely.
pub fn bibtex(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    let mut fields: Vec<(&str, String)> = vec![
        ("title", article.title.clone()),
        ("author", names::bibtex(&article.authors)),
        ("journal", journal.name.to_string()),
    ];
    if let Some(volume) = article.volume_designator() {
        fields.push(("volume", volume.to_string()));
    }
    if let Some(issue) = article.issue() {
        fields.push(("number", issue.to_string()));
    }
    if let Some(pages) = article.pages() {
        fields.push(("pages", pages.to_string()));
    }
    fields.push(("year", year.clone()));
    if let Some(doi) = article.doi() {
        fields.push(("doi", doi.to_string()));
    }
    fields.push(("publisher", journal.publisher.to_string()));

    let body = fields
        .iter()
        .map(|(key, value)| format!("  {key}={{{value}}}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("@article{{{},\n{body}\n}}", bibtex_key(article, &year))
}

/// The journal's own format: `Doe Ja (2023). Title. Journal, Volume 4, 007`
pub fn house(journal: &Journal, article: &ArticleRecord) -> String {
    let year = format_date(article.published_date.as_deref()).year;
    format!(
        "{}({year}). {}. {}, Volume {}, {}",
        lead(names::house(&article.authors), " "),
        article.title,
        journal.name,
        article.house_volume(),
        article.article_number()
    )
}
