//! `qian parse <text>` – show the numeral/category split.

use qian_core::{AssetStore, Resolver};

pub fn run_parse<S: AssetStore>(resolver: &Resolver<S>, text: &str) {
    let parsed = resolver.parse(text);
    tracing::debug!(token = ?parsed.token(), remainder = parsed.remainder(), "parsed");
    let numeral = parsed.numeral().map_or("-", |n| n.as_str());
    let category = parsed.category().map_or("-", |c| c.as_str());
    println!("NUMERAL  {numeral}");
    println!("CATEGORY {category}");
}
