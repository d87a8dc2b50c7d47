use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context};
use log::debug;

pub(crate) trait Fetcher {
    fn fetch(&self, path: &str) -> anyhow::Result<String>;
}

/// Reads files relative to a root directory.
#[derive(Debug, Clone)]
pub(crate) struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, path: &str) -> anyhow::Result<String> {
        if Path::new(path)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!("{path:?} points outside {:?}", self.root);
        }
        let full_path = self.root.join(path);
        debug!("reading {full_path:?}");
        std::fs::read_to_string(&full_path).with_context(|| format!("while reading {full_path:?}"))
    }
}

/// One filename per line. Blank lines and `#` comments are skipped.
pub(crate) fn parse_index(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub(crate) fn load_index(fetcher: &dyn Fetcher, index_path: &str) -> anyhow::Result<Vec<String>> {
    let text = fetcher
        .fetch(index_path)
        .with_context(|| format!("could not load post index {index_path:?}"))?;
    Ok(parse_index(&text))
}
