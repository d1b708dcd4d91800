use serde::{Deserialize, Serialize};

use crate::lenient;

/// A contributor, listed in citation order on an [`ArticleRecord`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Honorific such as "Dr." or "Prof.". Never rendered in citations.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Author {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }
}

/// The volume an article was published in.
///
/// Upstream records carry this either as a bare designator or as an object whose `number` and
/// `volume` fields may each hold it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VolumeRef {
    Plain(String),
    Structured {
        #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
        number: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
        volume: Option<String>,
    },
}

impl VolumeRef {
    /// Volume designator for the academic styles: `number` wins over `volume`.
    pub fn designator(&self) -> Option<&str> {
        match self {
            VolumeRef::Plain(s) => non_blank(s),
            VolumeRef::Structured { number, volume } => number
                .as_deref()
                .and_then(non_blank)
                .or_else(|| volume.as_deref().and_then(non_blank)),
        }
    }

    /// Volume number as printed by the house style, which reads `volume` first.
    pub fn house_number(&self) -> Option<&str> {
        match self {
            VolumeRef::Plain(s) => non_blank(s),
            VolumeRef::Structured { number, volume } => volume
                .as_deref()
                .and_then(non_blank)
                .or_else(|| number.as_deref().and_then(non_blank)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.designator().is_none()
    }
}

impl From<&str> for VolumeRef {
    fn from(s: &str) -> Self {
        VolumeRef::Plain(s.to_string())
    }
}

impl From<String> for VolumeRef {
    fn from(s: String) -> Self {
        VolumeRef::Plain(s)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// Article number used when a record does not carry one.
pub const DEFAULT_ARTICLE_NUMBER: &str = "001";

/// Everything a citation is rendered from.
///
/// Built by the caller from API data right before formatting; the formatters only ever borrow it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Citation order.
    #[serde(default, deserialize_with = "lenient::authors")]
    pub authors: Vec<Author>,
    /// ISO 8601 date or timestamp.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, deserialize_with = "lenient::volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeRef>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    /// Only read by the house style.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>) -> Self {
        ArticleRecord {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = Author>) -> Self {
        self.authors.extend(authors);
        self
    }

    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn with_volume(mut self, volume: impl Into<VolumeRef>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn with_article_number(mut self, number: impl Into<String>) -> Self {
        self.article_number = Some(number.into());
        self
    }

    /// Parse a single record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse either a single record or an array of records.
    pub fn many_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }

    pub fn volume_designator(&self) -> Option<&str> {
        self.volume.as_ref().and_then(VolumeRef::designator)
    }

    pub fn house_volume(&self) -> &str {
        self.volume
            .as_ref()
            .and_then(VolumeRef::house_number)
            .unwrap_or_default()
    }

    /// Article number, left-padded with zeros to three digits.
    pub fn article_number(&self) -> String {
        match self.article_number.as_deref().and_then(non_blank) {
            Some(n) => format!("{:0>3}", n.trim()),
            None => DEFAULT_ARTICLE_NUMBER.to_string(),
        }
    }

    pub fn issue(&self) -> Option<&str> {
        self.issue.as_deref().and_then(non_blank)
    }

    pub fn pages(&self) -> Option<&str> {
        self.pages.as_deref().and_then(non_blank)
    }

    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref().and_then(non_blank)
    }
}
