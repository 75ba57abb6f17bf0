//! Asset lookup for a resolved numeral and category.
//!
//! The locator owns no state: it composes a name pattern and asks an
//! [`AssetStore`] for matches. When several assets match, the first one the
//! store yields is used. [`FsAssetStore`] sorts its results, but other stores
//! may not, so callers must not rely on which of several matches is returned.

mod pattern;
mod store;

use std::path::{Path, PathBuf};

pub use pattern::{AssetPattern, DEFAULT_EXTENSION};
pub use store::{AssetStore, FsAssetStore};

use crate::category::CanonicalCategory;
use crate::error::QueryError;
use crate::numeral::CanonicalNumeral;

/// Location of a matched asset as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    path: PathBuf,
}

impl AssetPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Servable URL form: `prefix` followed by the path with `/` separators.
    pub fn url(&self, prefix: &str) -> String {
        let path = self.path.to_string_lossy().replace('\\', "/");
        let prefix = prefix.trim_end_matches('/');
        format!("{}/{}", prefix, path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct AssetLocator<S> {
    store: S,
    extension: String,
}

impl<S: AssetStore> AssetLocator<S> {
    pub fn new(store: S) -> Self {
        Self::with_extension(store, DEFAULT_EXTENSION)
    }

    pub fn with_extension(store: S, extension: impl Into<String>) -> Self {
        Self {
            store,
            extension: extension.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pattern(
        &self,
        numeral: &CanonicalNumeral,
        category: &CanonicalCategory,
    ) -> AssetPattern {
        AssetPattern::new(numeral, category, &self.extension)
    }

    /// First stored asset for the pair, or [`QueryError::NotFound`].
    pub fn locate(
        &self,
        numeral: &CanonicalNumeral,
        category: &CanonicalCategory,
    ) -> Result<AssetPath, QueryError> {
        let pattern = self.pattern(numeral, category);
        self.store
            .find(&pattern)?
            .into_iter()
            .next()
            .map(AssetPath::new)
            .ok_or_else(|| QueryError::NotFound {
                numeral: numeral.to_string(),
                category: category.to_string(),
            })
    }
}
