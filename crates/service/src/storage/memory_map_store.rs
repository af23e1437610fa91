use std::{hash::Hash, sync::Arc};

use indexmap::{Equivalent, IndexMap};
use tokio::sync::{RwLock, RwLockReadGuard};

/// Generic in-memory key-value map store.
///
/// Values are kept in insertion order. Re-inserting an existing key overwrites the
/// value in place. Clones share the same underlying map.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<IndexMap<K, V>>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(IndexMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// List all values in insertion order.
    pub async fn list(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite a value by key; returns the previous value if any.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.write().await;
        map.insert(key, value)
    }

    /// Values matching `pred`, in insertion order.
    pub async fn filter<F>(&self, pred: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|v| pred(v)).cloned().collect()
    }

    /// Hold a read guard across several steps, e.g. an existence check that must
    /// stay valid while another store is written.
    pub async fn read(&self) -> RwLockReadGuard<'_, IndexMap<K, V>> {
        self.inner.read().await
    }
}
