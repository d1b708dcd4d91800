use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The publication identity printed into every citation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    /// Full title, used by every style except Vancouver.
    pub name: Cow<'static, str>,
    /// NLM-style abbreviation, used by Vancouver.
    pub abbreviation: Cow<'static, str>,
    /// BibTeX `publisher` field.
    pub publisher: Cow<'static, str>,
}

impl Journal {
    pub const DEFAULT: Journal = Journal {
        name: Cow::Borrowed("Advances in Medicine & Health Sciences Journal"),
        abbreviation: Cow::Borrowed("Adv Med Health Sci J"),
        publisher: Cow::Borrowed("Advances in Medicine & Health Sciences Press"),
    };

    /// Load a profile. Keys left out keep their default values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for Journal {
    fn default() -> Self {
        Journal::DEFAULT
    }
}
