use std::num::NonZeroUsize;

use log::{debug, trace};
use lru::LruCache;

use crate::model::ArtifactCoordinate;

/// Number of special case resolutions kept per cache.
pub const DEFAULT_CAPACITY: usize = 64;

/// In-memory cache of resolved special cases, keyed by the special case token.
///
/// The first resolution stored for a token is kept until it is evicted as the least recently
/// used entry. Literal versions are never cached.
pub struct ArtifactCache {
    entries: LruCache<String, ArtifactCoordinate>,
}

impl Default for ArtifactCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ArtifactCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        ArtifactCache {
            entries: LruCache::new(capacity),
        }
    }

    pub fn lookup(&mut self, token: &str) -> Option<&ArtifactCoordinate> {
        if token.is_empty() {
            return None;
        }
        let found = self.entries.get(token);
        trace!(
            "Cache {} for special case #{}#",
            if found.is_some() { "hit" } else { "miss" },
            token
        );
        found
    }

    /// Stores a resolution unless the token is already present.
    pub fn insert(&mut self, token: &str, coordinate: ArtifactCoordinate) {
        if token.is_empty() {
            return;
        }
        if self.entries.contains(token) {
            debug!("Special case #{}# is already cached, keeping the first resolution", token);
            return;
        }
        if let Some((evicted, _)) = self.entries.push(token.to_owned(), coordinate) {
            debug!("Evicted special case #{}# from the cache", evicted);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
