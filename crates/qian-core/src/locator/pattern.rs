//! Fuzzy asset-name pattern.

use std::fmt;

use crate::category::CanonicalCategory;
use crate::numeral::CanonicalNumeral;

/// Default image extension for slip assets.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Glob-style name pattern `{numeral}*{category}*.{extension}`.
///
/// `*` matches any run of characters, including none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPattern {
    numeral: String,
    category: String,
    suffix: String,
}

impl AssetPattern {
    pub fn new(numeral: &CanonicalNumeral, category: &CanonicalCategory, extension: &str) -> Self {
        let extension = extension.trim_start_matches('.');
        Self {
            numeral: numeral.as_str().to_string(),
            category: category.as_str().to_string(),
            suffix: format!(".{extension}"),
        }
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// True when a bare file name (no directories) fits the pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(self.numeral.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .is_some_and(|middle| middle.contains(self.category.as_str()))
    }
}

impl fmt::Display for AssetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}*{}", self.numeral, self.category, self.suffix)
    }
}
