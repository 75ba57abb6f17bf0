//! Category vocabulary and matching.
//!
//! A query's trailing text is matched against a closed table of category
//! phrases. Each entry is keyed by its simplified spelling and lists the
//! accepted variants, primary traditional form first; the primary form is
//! the label used in asset names.

use std::fmt;

const STANDARD_ENTRIES: [(&str, &[&str]); 11] = [
    ("家宅运气", &["家宅運氣"]),
    ("财富增损", &["財富增損"]),
    ("谋望", &["謀望"]),
    ("人际关系", &["人際關係"]),
    ("诉讼是非", &["訴訟是非"]),
    ("出行", &["出行"]),
    ("疾病", &["疾病"]),
    ("风水厄运", &["風水厄運"]),
    ("失物", &["失物"]),
    ("请托", &["請託"]),
    ("婚姻", &["婚姻"]),
];

/// One row of the alias table.
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    key: String,
    aliases: Vec<String>,
}

impl CategoryEntry {
    /// Simplified-script key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Accepted variants; the first is the canonical label.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn primary(&self) -> &str {
        &self.aliases[0]
    }
}

/// Ordered, closed mapping from simplified keys to accepted variants.
#[derive(Debug, Clone)]
pub struct CategoryAliasTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryAliasTable {
    /// The eleven slip categories.
    pub fn standard() -> Self {
        let entries = STANDARD_ENTRIES
            .iter()
            .map(|(key, aliases)| CategoryEntry {
                key: (*key).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from `(key, aliases)` rows, keeping their order.
    ///
    /// Returns `None` if a key is empty, a row has no aliases, or an alias is
    /// empty (an empty string would match every input).
    pub fn from_entries<K, A, S>(rows: impl IntoIterator<Item = (K, A)>) -> Option<Self>
    where
        K: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        for (key, aliases) in rows {
            let key = key.into();
            let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
            if key.is_empty() || aliases.is_empty() || aliases.iter().any(String::is_empty) {
                return None;
            }
            entries.push(CategoryEntry { key, aliases });
        }
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Finds the category named in `text`.
    ///
    /// Whitespace is ignored. Entries are tried in table order and the first
    /// substring hit wins: the simplified key (answered with the primary
    /// label), then each alias in turn. There is no longest-match step, so
    /// phrases that contain one another resolve by table position.
    pub fn resolve_category(&self, text: &str) -> Option<CanonicalCategory> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        for entry in &self.entries {
            if cleaned.contains(entry.key.as_str()) {
                return Some(CanonicalCategory(entry.primary().to_string()));
            }
            if let Some(alias) = entry.aliases.iter().find(|a| cleaned.contains(a.as_str())) {
                return Some(CanonicalCategory(alias.clone()));
            }
        }
        None
    }
}

/// Traditional-script category label used in asset names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalCategory(String);

impl CanonicalCategory {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
