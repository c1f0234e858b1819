use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

/// Separators applied, in this order, when splitting a name into words.
pub const NAME_SEPARATORS: [&str; 4] = [".", " ", "-", "_"];

/// Words kept fully upper-cased unless configured otherwise.
pub const DEFAULT_UPPERCASE_EXCEPTIONS: [&str; 3] = ["ID", "JSON", "HTTP"];

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Splits `s` by each separator in turn, applying every separator to all the
/// pieces produced by the previous one. Empty pieces are kept.
pub fn split_by_one_of(s: &str, separators: &[&str]) -> Vec<String> {
    let mut parts = vec![s.to_string()];
    for separator in separators {
        parts = parts
            .iter()
            .flat_map(|part| part.split(separator).map(str::to_string))
            .collect();
    }
    parts
}

pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Converts wire-format names into identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameConverter {
    // Stored upper-cased, so lookups are case-insensitive.
    exceptions: BTreeSet<String>,
}

impl Default for NameConverter {
    fn default() -> Self {
        NameConverter::new(DEFAULT_UPPERCASE_EXCEPTIONS)
    }
}

impl NameConverter {
    pub fn new<I, S>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NameConverter {
            exceptions: exceptions
                .into_iter()
                .map(|e| e.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Field identifier for a property name: `owner_id` → `OwnerID`.
    ///
    /// Each word is title-cased (first letter upper, rest lower) unless it
    /// matches an exception, which is emitted fully upper-cased.
    pub fn convert(&self, name: &str) -> String {
        self.convert_with(name, title_case)
    }

    /// Type identifier for a schema name.
    ///
    /// Same word splitting and exceptions as [`NameConverter::convert`], but
    /// the tail of each word keeps its casing, so `BookId` stays `BookId`
    /// while `book_list` becomes `BookList`.
    pub fn convert_type_name(&self, name: &str) -> String {
        self.convert_with(name, capitalize)
    }

    fn convert_with(&self, name: &str, word_case: fn(&str) -> String) -> String {
        let mut result = String::with_capacity(name.len());
        for part in split_by_one_of(name, &NAME_SEPARATORS) {
            if part.is_empty() {
                continue;
            }
            let upper = part.to_uppercase();
            if self.exceptions.contains(&upper) {
                result.push_str(&upper);
            } else {
                result.push_str(&word_case(&part));
            }
        }
        result
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}
