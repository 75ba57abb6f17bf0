//! Storage collaborators that enumerate assets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::AssetPattern;

/// Lists stored assets whose names fit a pattern.
///
/// Implementations promise no ordering; the locator takes whatever comes first.
pub trait AssetStore {
    fn find(&self, pattern: &AssetPattern) -> io::Result<Vec<PathBuf>>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn find(&self, pattern: &AssetPattern) -> io::Result<Vec<PathBuf>> {
        (**self).find(pattern)
    }
}

/// Flat directory of asset files.
///
/// Only direct children of the root are considered. A missing root behaves
/// like an empty directory. Matches are sorted by path so the first match is
/// stable for a given directory content.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
            tracing::info!("created asset root at {}", self.root.display());
        }
        Ok(())
    }
}

impl AssetStore for FsAssetStore {
    fn find(&self, pattern: &AssetPattern) -> io::Result<Vec<PathBuf>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(root = %self.root.display(), "asset root missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut found = Vec::new();
        for entry in dir {
            let entry = entry?;
            // Follows symlinks; a dangling link is skipped.
            let is_file = fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if pattern.matches(name) {
                found.push(self.root.join(name));
            }
        }
        found.sort();

        tracing::debug!(%pattern, matches = found.len(), "asset lookup");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryAliasTable;
    use crate::numeral::{normalize_numeral, NumeralMap};

    fn pattern(num: &str, cat: &str) -> AssetPattern {
        let n = normalize_numeral(&NumeralMap::standard(), num).unwrap();
        let c = CategoryAliasTable::standard().resolve_category(cat).unwrap();
        AssetPattern::new(&n, &c, "jpg")
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path().join("nope"));
        assert!(store.find(&pattern("01", "婚姻")).unwrap().is_empty());
    }

    #[test]
    fn ensure_root_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("static").join("qian");
        let store = FsAssetStore::new(&root);
        store.ensure_root().unwrap();
        assert!(root.is_dir());
        store.ensure_root().unwrap();
    }

    #[test]
    fn lists_sorted_matching_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["零一b婚姻.jpg", "零一a婚姻.jpg", "零一婚姻.png", "零二婚姻.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("零一婚姻子目录.jpg")).unwrap();

        let store = FsAssetStore::new(dir.path());
        let found = store.find(&pattern("01", "婚姻")).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("零一a婚姻.jpg"),
                dir.path().join("零一b婚姻.jpg"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_match_and_dangling_links_do_not() {
        use std::os::unix::fs::symlink;

        let images = tempfile::tempdir().unwrap();
        let target = images.path().join("original.jpg");
        fs::write(&target, b"x").unwrap();

        let dir = tempfile::tempdir().unwrap();
        symlink(&target, dir.path().join("二三家宅運氣.jpg")).unwrap();
        let dangling = dir.path().join("二三b家宅運氣.jpg");
        symlink(images.path().join("gone.jpg"), dangling).unwrap();

        let store = FsAssetStore::new(dir.path());
        let found = store.find(&pattern("23", "家宅运气")).unwrap();
        assert_eq!(found, vec![dir.path().join("二三家宅運氣.jpg")]);
    }
}
