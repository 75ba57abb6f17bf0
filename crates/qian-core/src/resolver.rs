//! Query resolution boundary.
//!
//! Front ends hand over one decoded query string and get back either the
//! matched asset or a [`QueryError`] saying why not. Nothing here renders
//! user-facing text.

use anyhow::{Context, Result};

use crate::config::QianConfig;
use crate::error::QueryError;
use crate::locator::{AssetLocator, AssetPath, AssetStore, FsAssetStore};
use crate::query::{ParsedQuery, QueryParser};

/// Parser plus locator over one asset store.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    parser: QueryParser,
    locator: AssetLocator<S>,
}

impl<S: AssetStore> Resolver<S> {
    pub fn new(parser: QueryParser, locator: AssetLocator<S>) -> Self {
        Self { parser, locator }
    }

    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    pub fn locator(&self) -> &AssetLocator<S> {
        &self.locator
    }

    pub fn parse(&self, raw: &str) -> ParsedQuery {
        self.parser.parse_input(raw)
    }

    /// Resolves a raw query to the first matching asset.
    pub fn resolve(&self, raw: &str) -> Result<AssetPath, QueryError> {
        let (numeral, category) = self.parse(raw).into_pair()?;
        self.locator.locate(&numeral, &category)
    }
}

impl Resolver<FsAssetStore> {
    /// Resolver over the configured asset directory with the standard tables.
    pub fn from_config(cfg: &QianConfig) -> Result<Self> {
        let parser = QueryParser::standard().context("build numeral prefix matcher")?;
        let store = FsAssetStore::new(&cfg.asset_root);
        Ok(Self::new(
            parser,
            AssetLocator::with_extension(store, cfg.extension.clone()),
        ))
    }
}
