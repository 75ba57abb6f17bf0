//! Slip query resolution.
//!
//! Turns a free-form query such as `"23 家宅运气"` or `"二十三家宅運氣"` into a
//! canonical `(numeral, category)` pair and locates the matching slip image.

pub mod config;
pub mod logging;

pub mod category;
pub mod error;
pub mod locator;
pub mod numeral;
pub mod query;
pub mod resolver;

pub use category::{CanonicalCategory, CategoryAliasTable};
pub use error::QueryError;
pub use locator::{AssetLocator, AssetPath, AssetPattern, AssetStore, FsAssetStore};
pub use numeral::{normalize_numeral, CanonicalNumeral, NumeralMap};
pub use query::{ParsedQuery, QueryParser};
pub use resolver::Resolver;
