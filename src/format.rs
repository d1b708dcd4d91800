use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{article::ArticleRecord, journal::Journal, style};

/// The citation styles on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// The journal's house style
    Custom,
    Apa,
    Mla,
    Chicago,
    Vancouver,
    Bibtex,
}

impl FormatKind {
    pub const ALL: [FormatKind; 6] = [
        FormatKind::Custom,
        FormatKind::Apa,
        FormatKind::Mla,
        FormatKind::Chicago,
        FormatKind::Vancouver,
        FormatKind::Bibtex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::Custom => "custom",
            FormatKind::Apa => "apa",
            FormatKind::Mla => "mla",
            FormatKind::Chicago => "chicago",
            FormatKind::Vancouver => "vancouver",
            FormatKind::Bibtex => "bibtex",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FormatKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown citation format: {s}"))
    }
}

type RenderFn = fn(&Journal, &ArticleRecord) -> String;

/// One entry of the format table, enough to build a style picker without hard-coding styles.
pub struct CitationFormat {
    pub kind: FormatKind,
    pub display_name: &'static str,
    pub description: &'static str,
    render: RenderFn,
}

impl CitationFormat {
    /// Render with the default journal profile.
    pub fn generate(&self, article: &ArticleRecord) -> String {
        self.generate_with(&Journal::DEFAULT, article)
    }

    pub fn generate_with(&self, journal: &Journal, article: &ArticleRecord) -> String {
        (self.render)(journal, article)
    }
}

impl fmt::Debug for CitationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CitationFormat")
            .field("kind", &self.kind)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// Every supported format, in [`FormatKind::ALL`] order.
pub static CITATION_FORMATS: [CitationFormat; 6] = [
    CitationFormat {
        kind: FormatKind::Custom,
        display_name: "AMHSJ",
        description: "The journal's house citation style",
        render: style::house,
    },
    CitationFormat {
        kind: FormatKind::Apa,
        display_name: "APA",
        description: "American Psychological Association, 7th edition",
        render: style::apa,
    },
    CitationFormat {
        kind: FormatKind::Mla,
        display_name: "MLA",
        description: "Modern Language Association, 9th edition",
        render: style::mla,
    },
    CitationFormat {
        kind: FormatKind::Chicago,
        display_name: "Chicago",
        description: "Chicago Manual of Style, 17th edition",
        render: style::chicago,
    },
    CitationFormat {
        kind: FormatKind::Vancouver,
        display_name: "Vancouver",
        description: "Vancouver style, common in medicine and the health sciences",
        render: style::vancouver,
    },
    CitationFormat {
        kind: FormatKind::Bibtex,
        display_name: "BibTeX",
        description: "BibTeX entry for LaTeX reference managers",
        render: style::bibtex,
    },
];

/// Look up the table entry for `kind`.
pub fn citation_format(kind: FormatKind) -> &'static CitationFormat {
    // The table is laid out in `FormatKind::ALL` order.
    &CITATION_FORMATS[kind as usize]
}

/// Render `article` in the `kind` style with the default journal profile.
pub fn generate(article: &ArticleRecord, kind: FormatKind) -> String {
    citation_format(kind).generate(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Author, VolumeRef};
    use proptest::strategy::Strategy;

    fn example() -> ArticleRecord {
        ArticleRecord::new("X")
            .with_author(Author::new("Jane", "Doe"))
            .with_published_date("2023-05-01")
            .with_volume(VolumeRef::Structured {
                number: None,
                volume: Some("4".into()),
            })
            .with_issue("2")
            .with_pages("10-20")
            .with_doi("10.1/x")
    }

    #[test]
    fn table_matches_kind_order() {
        for (i, kind) in FormatKind::ALL.into_iter().enumerate() {
            assert_eq!(CITATION_FORMATS[i].kind, kind);
            assert_eq!(citation_format(kind).kind, kind);
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in FormatKind::ALL {
            assert_eq!(kind.as_str().parse::<FormatKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(" APA ".parse::<FormatKind>(), Ok(FormatKind::Apa));
        assert!("harvard".parse::<FormatKind>().is_err());
    }

    #[test]
    fn kind_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&FormatKind::Vancouver).unwrap(), r#""vancouver""#);
        assert_eq!(
            serde_json::from_str::<FormatKind>(r#""bibtex""#).unwrap(),
            FormatKind::Bibtex
        );
    }

    #[test]
    fn known_outputs() {
        assert_eq!(
            generate(&example(), FormatKind::Vancouver),
            "Doe J. X. Adv Med Health Sci J. 2023;4(2):10-20. doi:10.1/x."
        );
        assert_eq!(
            generate(&example(), FormatKind::Apa),
            "Doe, J. (2023). X. *Advances in Medicine & Health Sciences Journal*, *4*(2), 10-20. https://doi.org/10.1/x"
        );
    }

    #[test]
    fn volume_number_wins_everywhere_but_house() {
        let rec = example().with_volume(VolumeRef::Structured {
            number: Some("9".into()),
            volume: Some("4".into()),
        });
        assert!(generate(&rec, FormatKind::Apa).contains("*9*(2)"));
        assert!(generate(&rec, FormatKind::Mla).contains("vol. 9"));
        assert!(generate(&rec, FormatKind::Chicago).contains("* 9, no. 2"));
        assert!(generate(&rec, FormatKind::Vancouver).contains(";9(2)"));
        assert!(generate(&rec, FormatKind::Bibtex).contains("volume={9}"));
        assert!(generate(&rec, FormatKind::Custom).contains("Volume 4,"));
    }

    #[test]
    fn seven_and_eight_apa_authors() {
        let authors = |n: usize| {
            (1..=n)
                .map(|i| Author::new("Pat", format!("Author{i}")))
                .collect::<Vec<_>>()
        };
        let seven = generate(&example().with_authors(authors(6)), FormatKind::Apa);
        for i in 1..=6 {
            assert!(seven.contains(&format!("Author{i}, P.")));
        }
        assert!(!seven.contains("..."));

        let eight = ArticleRecord::new("X").with_authors(authors(8));
        let out = generate(&eight, FormatKind::Apa);
        assert!(out.contains("Author6, P., ... Author8, P."));
        assert!(!out.contains("Author7"));
    }

    fn arb_author() -> impl Strategy<Value = Author> {
        ("[A-Za-z]{0,8}( [A-Za-z]{1,8})?", "[A-Za-z' -]{0,12}")
            .prop_map(|(first, last)| Author::new(first, last))
    }

    fn arb_article() -> impl Strategy<Value = ArticleRecord> {
        (
            "\\PC{0,40}",
            proptest::collection::vec(arb_author(), 0..10),
            proptest::option::of("(19|20)[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])"),
            proptest::option::of("[0-9]{1,3}"),
            proptest::option::of("[0-9]{1,2}"),
            proptest::option::of("[0-9]{1,3}-[0-9]{1,3}"),
            proptest::option::of("10\\.[0-9]{4}/[a-z0-9.]{1,12}"),
            proptest::option::of("[0-9]{1,4}"),
        )
            .prop_map(|(title, authors, date, volume, issue, pages, doi, number)| ArticleRecord {
                title,
                authors,
                published_date: date,
                doi,
                volume: volume.map(VolumeRef::Plain),
                issue,
                pages,
                article_number: number,
            })
    }

    #[test]
    fn generation_is_deterministic_and_pure() {
        proptest::proptest!(|(article in arb_article())| {
            let before = article.clone();
            for format in &CITATION_FORMATS {
                let a = format.generate(&article);
                let b = format.generate(&article.clone());
                proptest::prop_assert_eq!(a, b);
            }
            proptest::prop_assert_eq!(before, article);
        })
    }

    #[test]
    fn undated_articles_say_nd() {
        proptest::proptest!(|(article in arb_article())| {
            let article = ArticleRecord { published_date: None, ..article };
            for format in &CITATION_FORMATS {
                let out = format.generate(&article);
                proptest::prop_assert!(out.contains("n.d."), "{}: {}", format.kind, out);
            }
        })
    }

    #[test]
    fn authorless_articles_render() {
        proptest::proptest!(|(article in arb_article())| {
            let article = ArticleRecord { authors: Vec::new(), ..article };
            for format in &CITATION_FORMATS {
                let _ = format.generate(&article);
            }
            let bib = generate(&article, FormatKind::Bibtex);
            proptest::prop_assert!(bib.starts_with("@article{article"), "{}", bib);
            proptest::prop_assert!(bib.contains("  author={},"), "{}", bib);
        })
    }

    #[test]
    fn bibtex_never_prints_absent_fields() {
        proptest::proptest!(|(article in arb_article())| {
            let bib = generate(&article, FormatKind::Bibtex);
            proptest::prop_assert_eq!(bib.contains("volume="), article.volume.is_some());
            proptest::prop_assert_eq!(bib.contains("number="), article.issue.is_some());
            proptest::prop_assert_eq!(bib.contains("pages="), article.pages.is_some());
            proptest::prop_assert_eq!(bib.contains("doi="), article.doi.is_some());
        })
    }

    #[test]
    fn house_article_number_is_three_digits() {
        proptest::proptest!(|(n in "[0-9]{1,3}")| {
            let rec = ArticleRecord::new("X").with_article_number(n.clone());
            let out = generate(&rec, FormatKind::Custom);
            let expected = format!(", {:0>3}", n);
            proptest::prop_assert!(out.ends_with(&expected), "{}", out);
        })
    }
}
