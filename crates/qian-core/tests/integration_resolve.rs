//! Integration test: resolve raw queries against a slip image directory on disk.

mod common;

use qian_core::config::QianConfig;
use qian_core::{FsAssetStore, QueryError, Resolver};

fn resolver_for(root: &std::path::Path) -> Resolver<FsAssetStore> {
    let cfg = QianConfig {
        asset_root: root.to_path_buf(),
        ..QianConfig::default()
    };
    Resolver::from_config(&cfg).unwrap()
}

#[test]
fn every_category_resolves_from_simplified_input() {
    let names = [
        "零一家宅運氣.jpg",
        "零二財富增損.jpg",
        "零三謀望.jpg",
        "零四人際關係.jpg",
        "零五訴訟是非.jpg",
        "零六出行.jpg",
        "零七疾病.jpg",
        "零八風水厄運.jpg",
        "零九失物.jpg",
        "一零請託.jpg",
        "一一婚姻.jpg",
    ];
    let dir = common::slip_dir::with_files(&names);
    let r = resolver_for(dir.path());

    let queries = [
        "01家宅运气",
        "二 财富增损",
        "〇三谋望",
        "04 人际关系",
        "五诉讼是非",
        "六出行",
        "七 疾病",
        "08风水厄运",
        "九失物",
        "十请托",
        "十一 婚姻",
    ];
    for (query, name) in queries.iter().zip(names) {
        match r.resolve(query) {
            Ok(found) => assert_eq!(found.path(), dir.path().join(name), "query {query:?}"),
            Err(e) => panic!("query {query:?}: {e}"),
        }
    }
}

#[test]
fn single_ascii_digit_is_not_a_prefix() {
    let dir = common::slip_dir::with_files(&["零四人際關係.jpg"]);
    let r = resolver_for(dir.path());
    assert!(matches!(r.resolve("4人际关系"), Err(QueryError::ParseFailure)));
    assert!(r.resolve("04人际关系").is_ok());
}

#[test]
fn first_match_is_lexicographic() {
    let dir = common::slip_dir::with_files(&[
        "二三_下下_家宅運氣.jpg",
        "二三_上上_家宅運氣.jpg",
        "二三家宅運氣_備份.jpg",
    ]);
    let r = resolver_for(dir.path());
    let found = r.resolve("二十三家宅运气");
    // "二十三" splits on 十 into 二 and 三.
    assert_eq!(
        found.unwrap().path(),
        dir.path().join("二三_上上_家宅運氣.jpg")
    );
}

#[test]
fn missing_asset_and_missing_root_are_not_found() {
    let dir = common::slip_dir::with_files(&["二三家宅運氣.png"]);
    let r = resolver_for(dir.path());
    assert!(matches!(
        r.resolve("23家宅运气"),
        Err(QueryError::NotFound { numeral, category })
            if numeral == "二三" && category == "家宅運氣"
    ));

    let gone = resolver_for(&dir.path().join("absent"));
    assert!(matches!(
        gone.resolve("23家宅运气"),
        Err(QueryError::NotFound { .. })
    ));
}

#[test]
fn url_form_of_resolved_asset() {
    let dir = common::slip_dir::with_files(&["九九婚姻.jpg"]);
    let r = resolver_for(dir.path());
    let found = r.resolve("99婚姻").unwrap();
    let url = found.url("/");
    assert!(url.starts_with('/'));
    assert!(url.ends_with("/九九婚姻.jpg"));
    assert!(!url.contains('\\'));
}
