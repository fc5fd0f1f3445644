//! Summary store configuration

use std::path::{Path, PathBuf};

/// Default directory holding published summaries
pub const DEFAULT_SUMMARIES_DIR: &str = "summaries";
/// Default name of the week index inside the summaries directory
pub const DEFAULT_INDEX_FILE: &str = "index.json";
/// Environment variable overriding the summaries directory
pub const SUMMARIES_DIR_ENV: &str = "SUMMARIES_DIR";

/// Where published summaries live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory containing `index.json` and the weekly records
    pub root: PathBuf,
    /// Index file name, relative to `root`
    pub index_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_SUMMARIES_DIR),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Config rooted at `root` with the default index name
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Defaults, with `SUMMARIES_DIR` overriding the root when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(SUMMARIES_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => Self::with_root(dir),
            None => Self::default(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    pub fn record_path(&self, file: &str) -> PathBuf {
        self.root.join(Path::new(file))
    }
}
