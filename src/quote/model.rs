use serde::Serialize;
use std::collections::BTreeMap;

use super::QuoteField;
use crate::core::csv::is_unavailable;

/// One symbol's snapshot: field name → raw text as sent by the service.
///
/// Values stay text; convert with [`number`](Self::number) or parse them yourself.
/// The service's `N/A` sentinel is kept in [`raw`](Self::raw) and hidden by the
/// typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuoteRecord {
    /// The symbol this row was requested for.
    pub symbol: String,
    fields: BTreeMap<String, String>,
}

impl QuoteRecord {
    pub(crate) fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            fields: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, field: QuoteField, raw: impl Into<String>) {
        self.fields.insert(field.name().to_string(), raw.into());
    }

    /// Raw text for `name`, including the `N/A` sentinel. `None` if the field was not requested.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text for `name`, or `None` if it was not requested or the service reported it unavailable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.raw(name).filter(|v| !is_unavailable(v))
    }

    /// Typed lookup by [`QuoteField`].
    #[must_use]
    pub fn field(&self, field: QuoteField) -> Option<&str> {
        self.get(field.name())
    }

    /// Parse `name` as a float. Thousands separators and a trailing `%` are ignored.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        let v = self.get(name)?;
        let cleaned: String = v
            .trim_end_matches('%')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        cleaned.parse().ok()
    }

    #[must_use]
    pub fn previous_close(&self) -> Option<&str> {
        self.field(QuoteField::PreviousClose)
    }

    /// Iterate over `(name, raw)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
