//! Author-list rendering, one policy per citation style.
//!
//! Every function borrows the author slice in citation order and returns the rendered list; an
//! empty slice always yields an empty string.

use crate::article::Author;

/// APA lists every author up to this count.
const APA_MAX_LISTED: usize = 7;
/// Authors kept before the ellipsis once APA truncates.
const APA_TRUNCATED_HEAD: usize = 6;
/// MLA lists this many authors before switching to "et al.".
const MLA_MAX_LISTED: usize = 2;
const CHICAGO_MAX_LISTED: usize = 3;
const VANCOUVER_MAX_LISTED: usize = 6;
/// Authors Vancouver keeps before "et al.".
const VANCOUVER_TRUNCATED_HEAD: usize = 3;
const HOUSE_MAX_LISTED: usize = 3;

fn first(author: &Author) -> &str {
    author.first_name.trim()
}

fn last(author: &Author) -> &str {
    author.last_name.trim()
}

/// Join the non-empty parts with `sep`.
fn join_parts(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

fn initial(author: &Author) -> Option<char> {
    first(author).chars().next()
}

/// `Last, First`
fn inverted(author: &Author) -> String {
    join_parts(&[last(author), first(author)], ", ")
}

/// `First Last`
fn natural(author: &Author) -> String {
    join_parts(&[first(author), last(author)], " ")
}

/// `Last, F.`
fn apa_name(author: &Author) -> String {
    match initial(author) {
        Some(c) => join_parts(&[last(author), format!("{c}.").as_str()], ", "),
        None => last(author).to_string(),
    }
}

/// `Last F`
fn vancouver_name(author: &Author) -> String {
    match initial(author) {
        Some(c) => join_parts(&[last(author), c.to_string().as_str()], " "),
        None => last(author).to_string(),
    }
}

/// `Last Fi`, from the first two characters of the first name.
fn house_name(author: &Author) -> String {
    let initials: String = first(author).chars().take(2).collect();
    join_parts(&[last(author), initials.as_str()], " ")
}

/// `A, B, & C`; past seven authors, the first six, an ellipsis, then the final author.
pub fn apa(authors: &[Author]) -> String {
    let names: Vec<String> = authors.iter().map(apa_name).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., tail] if names.len() <= APA_MAX_LISTED => {
            format!("{}, & {}", init.join(", "), tail)
        }
        [.., tail] => format!("{}, ... {}", names[..APA_TRUNCATED_HEAD].join(", "), tail),
    }
}

/// `Last, First`, `Last, First, and First Last`, or `Last, First, et al.`
pub fn mla(authors: &[Author]) -> String {
    match authors {
        [] => String::new(),
        [only] => inverted(only),
        [lead, second] if authors.len() == MLA_MAX_LISTED => {
            format!("{}, and {}", inverted(lead), natural(second))
        }
        [lead, ..] => format!("{}, et al.", inverted(lead)),
    }
}

/// A lone author inverted; two or three as `First Last` with `and` before the last; otherwise
/// `Last, First, et al.`
pub fn chicago(authors: &[Author]) -> String {
    match authors {
        [] => String::new(),
        [only] => inverted(only),
        listed if listed.len() <= CHICAGO_MAX_LISTED => {
            let mut names: Vec<String> = listed.iter().map(natural).collect();
            if let Some(tail) = names.last_mut() {
                *tail = format!("and {tail}");
            }
            names.join(", ")
        }
        [lead, ..] => format!("{}, et al.", inverted(lead)),
    }
}

/// `Last F, Last F`; past six authors, the first three and `et al.`
pub fn vancouver(authors: &[Author]) -> String {
    let names: Vec<String> = authors.iter().map(vancouver_name).collect();
    if names.len() > VANCOUVER_MAX_LISTED {
        format!("{}, et al.", names[..VANCOUVER_TRUNCATED_HEAD].join(", "))
    } else {
        names.join(", ")
    }
}

/// `Last Fi, Last Fi and Last Fi`; past three authors, the lead author and `et al.`
pub fn house(authors: &[Author]) -> String {
    let names: Vec<String> = authors.iter().map(house_name).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., tail] if names.len() <= HOUSE_MAX_LISTED => {
            format!("{} and {}", init.join(", "), tail)
        }
        [lead, ..] => format!("{lead}, et al."),
    }
}

/// BibTeX `author` field: `First Last and First Last`.
pub fn bibtex(authors: &[Author]) -> String {
    authors.iter().map(natural).collect::<Vec<_>>().join(" and ")
}
