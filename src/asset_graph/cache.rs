use dashmap::DashMap;
use std::sync::Arc;

use crate::asset_graph::DecodeError;

/// Produces the node for a name. `Ok(None)` means the name doesn't exist in any archive, which is
/// not an error: callers decide whether a missing asset matters.
pub trait AssetGenerator<T> {
    fn generate(&self, name: &str) -> Result<Option<T>, DecodeError>;
}

/// Decode-once cache. Every name is generated at most once until [`AssetCache::clear`]; later
/// lookups hand out the same [`Arc`]. Misses and decode failures are not cached.
pub struct AssetCache<G: AssetGenerator<T>, T> {
    ref_cache: DashMap<String, Arc<T>>,
    generator: G,
}

impl<G: AssetGenerator<T>, T> AssetCache<G, T> {
    pub fn new(generator: G) -> Self {
        Self {
            ref_cache: DashMap::with_capacity(64),
            generator,
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Option<Arc<T>>, DecodeError> {
        self.get_or_insert_with(name, |name| self.generator.generate(name))
    }

    /// Returns the cached node for `name`, or computes, stores and returns it.
    pub fn get_or_insert_with<F>(&self, name: &str, compute: F) -> Result<Option<Arc<T>>, DecodeError>
    where
        F: FnOnce(&str) -> Result<Option<T>, DecodeError>,
    {
        // The read guard must be gone before inserting, dashmap would deadlock on the shard otherwise.
        if let Some(cached) = self.ref_cache.get(name).map(|entry| entry.value().clone()) {
            return Ok(Some(cached));
        }

        let Some(node) = compute(name)? else {
            return Ok(None);
        };

        // or_insert keeps the first node, in case compute ended up populating the entry itself.
        let arc = self
            .ref_cache
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(node))
            .value()
            .clone();
        Ok(Some(arc))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ref_cache.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ref_cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ref_cache.is_empty()
    }

    pub fn clear(&self) {
        self.ref_cache.clear();
        self.ref_cache.shrink_to_fit();
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}
