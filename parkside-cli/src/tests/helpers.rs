//! Test helpers for temporary workspaces and stubbed feature sources.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use parkside_core::FeatureSource;
use parkside_data::overpass::test_support::StubOverpassSource;
use crate::search::{SearchConfig, SearchSourceBuilder};
use std::cell::Cell;
use tempfile::TempDir;

/// Saved response with a playground and a cafe but no chargers.
pub(super) const RESPONSE_WITHOUT_CHARGERS: &str = r#"{
  "elements": [
    {"type": "node", "id": 1, "lat": 59.9139, "lon": 10.7522,
     "tags": {"leisure": "playground"}},
    {"type": "node", "id": 2, "lat": 59.9140, "lon": 10.7522,
     "tags": {"amenity": "cafe", "name": "Tekopp"}}
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }
}

/// Hands out a clone of a stub source and counts how often it was asked.
#[derive(Debug)]
pub(super) struct StubSourceBuilder {
    source: StubOverpassSource,
    builds: Cell<usize>,
}

impl StubSourceBuilder {
    pub(super) fn new(source: StubOverpassSource) -> Self {
        Self {
            source,
            builds: Cell::new(0),
        }
    }

    pub(super) fn builds(&self) -> usize {
        self.builds.get()
    }
}

impl SearchSourceBuilder for StubSourceBuilder {
    fn build(&self, _config: &SearchConfig) -> Result<Box<dyn FeatureSource>, CliError> {
        self.builds.set(self.builds.get() + 1);
        Ok(Box::new(self.source.clone()))
    }
}
