use std::collections::HashMap;

use crate::io::common::loader::{RawAsset, RawAssetLoader};

/// A single archive held in memory. Mostly useful for tooling and tests that build their data
/// on the fly.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    name: String,
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: impl Into<String>, data: Vec<u8>) {
        self.entries.insert(path.into(), data);
    }

    pub fn with_entry(mut self, path: impl Into<String>, data: Vec<u8>) -> Self {
        self.insert(path, data);
        self
    }
}

impl RawAssetLoader for MemoryLoader {
    fn load_raw_owned(&self, path: &str) -> Result<Option<RawAsset>, std::io::Error> {
        Ok(self.entries.get(path).map(|data| RawAsset {
            archive: self.name.clone(),
            data: data.clone(),
        }))
    }
}
