//! Citation rendering for journal articles.
//!
//! An [`ArticleRecord`] is rendered into one of six styles: the journal's house format, APA, MLA,
//! Chicago, Vancouver and BibTeX. Rendering is pure; missing optional data drops the matching
//! clause or prints `n.d.` in place of a date.
//!
//! ```
//! use cite::{ArticleRecord, Author, FormatKind, generate};
//!
//! let article = ArticleRecord::new("X")
//!     .with_author(Author::new("Jane", "Doe"))
//!     .with_published_date("2023-05-01")
//!     .with_volume("4")
//!     .with_issue("2")
//!     .with_pages("10-20")
//!     .with_doi("10.1/x");
//!
//! assert_eq!(
//!     generate(&article, FormatKind::Vancouver),
//!     "Doe J. X. Adv Med Health Sci J. 2023;4(2):10-20. doi:10.1/x."
//! );
//! ```

pub mod article;
pub mod date;
pub mod format;
pub mod journal;
mod lenient;
pub mod names;
pub mod style;

pub use article::{ArticleRecord, Author, VolumeRef};
pub use date::{PublicationDate, format_date};
pub use format::{CITATION_FORMATS, CitationFormat, FormatKind, citation_format, generate};
pub use journal::Journal;
