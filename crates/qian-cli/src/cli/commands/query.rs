//! `qian query <text>` – resolve a query to a slip image.

use anyhow::{bail, Context, Result};
use qian_core::config::QianConfig;
use qian_core::{FsAssetStore, Resolver};

use super::user_message;

/// Prints the asset path and its URL form, or fails with the user message.
pub fn run_query(resolver: &Resolver<FsAssetStore>, cfg: &QianConfig, text: &str) -> Result<()> {
    let store = resolver.locator().store();
    store
        .ensure_root()
        .with_context(|| format!("create asset root {}", store.root().display()))?;

    match resolver.resolve(text) {
        Ok(asset) => {
            tracing::info!(query = %text, path = %asset.path().display(), "resolved");
            println!("{}", asset.path().display());
            println!("{}", asset.url(&cfg.url_prefix));
            Ok(())
        }
        Err(err) => {
            tracing::info!(query = %text, "unresolved: {}", err);
            bail!("{}", user_message(&err))
        }
    }
}
