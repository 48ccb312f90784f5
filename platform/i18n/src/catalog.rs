//! Language tables and placeholder interpolation.
//!
//! # Invariants
//!
//! 1. Tables are immutable once registered in a [`Catalog`].
//! 2. `interpolate` makes a single left-to-right pass: substituted values are
//!    never rescanned for further `{{name}}` tokens.

use std::collections::{BTreeMap, HashMap};

use crate::tables;

/// Flat mapping from key to template for one language.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    entries: HashMap<String, String>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// All language tables known to the process, keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<String, LanguageTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped `en` and `tr` tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_language("en", LanguageTable::from_pairs(tables::EN.iter().copied()));
        catalog.add_language("tr", LanguageTable::from_pairs(tables::TR.iter().copied()));
        catalog
    }

    pub fn add_language(&mut self, code: impl Into<String>, table: LanguageTable) {
        self.tables.insert(code.into(), table);
    }

    #[must_use]
    pub fn table(&self, code: &str) -> Option<&LanguageTable> {
        self.tables.get(code)
    }

    pub fn supports(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Keys present in `reference` but absent from `code`, sorted.
    pub fn missing_keys(&self, code: &str, reference: &str) -> Vec<String> {
        let (Some(target), Some(reference)) = (self.table(code), self.table(reference)) else {
            return Vec::new();
        };
        let mut missing: Vec<String> = reference
            .keys()
            .filter(|key| target.get(key).is_none())
            .map(String::from)
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Replaces every `{{name}}` whose `name` appears in `params`. Unknown
/// placeholders and unterminated `{{` are copied through untouched.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                // Keep scanning inside; a later `{{` may open a real placeholder.
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
