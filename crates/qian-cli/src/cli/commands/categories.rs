//! `qian categories` – list the alias table.

use qian_core::{AssetStore, Resolver};

pub fn run_categories<S: AssetStore>(resolver: &Resolver<S>) {
    println!("KEY        ALIASES");
    for entry in resolver.parser().categories().entries() {
        println!("{:<10} {}", entry.key(), entry.aliases().join(" / "));
    }
}
