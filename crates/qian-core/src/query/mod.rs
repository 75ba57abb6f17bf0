//! Raw query parsing.
//!
//! A query is a numeral prefix (two ASCII digits, or one to three Chinese
//! numeral characters) anchored at the start, followed by free category text.
//! Whitespace anywhere in the query is dropped first.

use regex::Regex;

use crate::category::{CanonicalCategory, CategoryAliasTable};
use crate::error::QueryError;
use crate::numeral::{normalize_numeral, CanonicalNumeral, NumeralMap};

/// Result of parsing one query. Either half may be missing.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuery {
    numeral: Option<CanonicalNumeral>,
    category: Option<CanonicalCategory>,
    /// Matched numeral prefix; `None` when the query has no numeral shape at all.
    token: Option<String>,
    remainder: String,
}

impl ParsedQuery {
    pub fn numeral(&self) -> Option<&CanonicalNumeral> {
        self.numeral.as_ref()
    }

    pub fn category(&self) -> Option<&CanonicalCategory> {
        self.category.as_ref()
    }

    /// Raw numeral prefix as matched, before normalization.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Text after the numeral prefix, whitespace removed.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    pub fn is_complete(&self) -> bool {
        self.numeral.is_some() && self.category.is_some()
    }

    /// Both halves, or the error kind explaining which one is missing.
    ///
    /// A missing prefix is reported before a bad numeral, and a bad numeral
    /// before an unknown category.
    pub fn into_pair(self) -> Result<(CanonicalNumeral, CanonicalCategory), QueryError> {
        let token = self.token.ok_or(QueryError::ParseFailure)?;
        let numeral = self
            .numeral
            .ok_or(QueryError::UnrecognizedNumeral { token })?;
        let category = self.category.ok_or(QueryError::UnrecognizedCategory {
            text: self.remainder,
        })?;
        Ok((numeral, category))
    }
}

/// Splits queries into numeral and category using explicit tables.
#[derive(Debug, Clone)]
pub struct QueryParser {
    numerals: NumeralMap,
    categories: CategoryAliasTable,
    prefix: Regex,
}

impl QueryParser {
    pub fn new(
        numerals: NumeralMap,
        categories: CategoryAliasTable,
    ) -> Result<Self, regex::Error> {
        let alphabet: String = numerals
            .alphabet()
            .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
            .collect();
        let prefix = Regex::new(&format!(r"^(?s)([0-9]{{2}}|[{alphabet}]{{1,3}})(.*)$"))?;
        Ok(Self {
            numerals,
            categories,
            prefix,
        })
    }

    /// Parser over the standard numeral map and category table.
    pub fn standard() -> Result<Self, regex::Error> {
        Self::new(NumeralMap::standard(), CategoryAliasTable::standard())
    }

    pub fn numerals(&self) -> &NumeralMap {
        &self.numerals
    }

    pub fn categories(&self) -> &CategoryAliasTable {
        &self.categories
    }

    /// Parses a raw query.
    ///
    /// Without a numeral prefix at position 0 both halves are absent. With one,
    /// the prefix and the remainder are resolved independently.
    pub fn parse_input(&self, raw: &str) -> ParsedQuery {
        let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let Some(caps) = self.prefix.captures(&cleaned) else {
            return ParsedQuery::default();
        };
        let token = caps.get(1).map_or("", |m| m.as_str());
        let remainder = caps.get(2).map_or("", |m| m.as_str());

        ParsedQuery {
            numeral: normalize_numeral(&self.numerals, token).ok(),
            category: self.categories.resolve_category(remainder),
            token: Some(token.to_string()),
            remainder: remainder.to_string(),
        }
    }
}
