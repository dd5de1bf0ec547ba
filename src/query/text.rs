//! Text folding for search and a small collation for name ordering.
//!
//! Catalog names mix Uzbek Latin (with its several apostrophe glyphs),
//! Cyrillic and plain ASCII, so comparisons go through Unicode
//! normalisation and full lowercasing rather than ASCII tricks.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Glyphs used interchangeably for the Uzbek `o'` / `g'` apostrophe
const APOSTROPHES: [char; 5] = ['\u{02BB}', '\u{02BC}', '\u{2018}', '\u{2019}', '`'];

fn unify_apostrophe(c: char) -> char {
    if APOSTROPHES.contains(&c) {
        '\''
    } else {
        c
    }
}

/// Fold text for case-insensitive substring matching
pub fn fold(text: &str) -> String {
    text.nfkc()
        .map(unify_apostrophe)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sort key approximating a locale-aware comparison.
///
/// Levels are compared in order: base letters, then accents, then case
/// (lowercase first). Only Latin letters shed their marks at the first
/// level. Composed Cyrillic letters such as `й` and `ў` stay distinct
/// letters that sort right after their base (`и`, `у`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(char, String)>,
    secondary: Vec<String>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let letters: String = text
            .nfc()
            .map(unify_apostrophe)
            .flat_map(char::to_lowercase)
            .collect();

        let mut primary = Vec::with_capacity(letters.len());
        let mut secondary = Vec::with_capacity(letters.len());
        for letter in letters.chars() {
            let mut parts = std::iter::once(letter).nfd();
            let base = parts.next().unwrap_or(letter);
            let marks: String = parts.collect();

            if base.is_ascii_alphabetic() {
                primary.push((base, String::new()));
                secondary.push(marks);
            } else {
                primary.push((base, marks));
                secondary.push(String::new());
            }
        }

        let tertiary = text
            .nfc()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}
