use std::{fmt, fs, path::PathBuf, str::FromStr};

use clap::{ArgAction, Parser, Subcommand};
use cite::FormatKind;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render citations for one or more article records
    ///
    /// The stderr summary counts sources: `✓` for those that loaded, `✗` for those that failed.
    Format {
        /// JSON files holding a record or an array of records; `-` reads stdin
        #[arg(value_name = "SRC")]
        from: Vec<Source>,
        /// Citation style
        #[arg(short, long, value_enum, default_value_t = FormatKind::Apa)]
        style: FormatKind,
        /// Journal profile (JSON) overriding the built-in journal name, abbreviation and publisher
        #[arg(short, long, env = "CITE_JOURNAL", value_name = "FILE")]
        journal: Option<PathBuf>,
    },
    /// List the available citation styles
    Styles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where article records are read from, which can either be
///
/// - standard input, spelled `-`, or
/// - a JSON file.
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl FromStr for Source {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Source::Stdin);
        }
        // Missing files are kept as given so the load error can name them.
        Ok(Source::File(
            fs::canonicalize(s).unwrap_or_else(|_| PathBuf::from(s)),
        ))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
