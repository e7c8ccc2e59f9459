// Copyright 2025 Cowboy AI, LLC.

//! Keyed binding storage
//!
//! [`BindingTable`] is the mapping a container keeps from [`Key`] to whatever
//! it binds (a value, a provider, a descriptor). It only stores and finds
//! entries; resolving or constructing them is left to the container.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::annotation::Annotation;
use crate::errors::{BindingError, BindingResult};
use crate::key::Key;
use crate::kind::Kind;

fn label<K: fmt::Display, A: fmt::Display>(key: &Key<K, A>) -> String {
    format!("{} [{}]", key.kind(), key.annotation())
}

/// Ordered map from binding keys to bound values
///
/// Iteration follows declaration order.
pub struct BindingTable<V, K = Kind, A = Annotation> {
    entries: IndexMap<Key<K, A>, V>,
}

impl<V, K, A> BindingTable<V, K, A>
where
    K: Hash + fmt::Display,
    A: Hash + fmt::Display,
{
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty table with room for `capacity` bindings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Bind a value, failing if an equal key is already bound
    pub fn bind(&mut self, key: Key<K, A>, value: V) -> BindingResult<()> {
        if self.entries.contains_key(&key) {
            return Err(BindingError::AlreadyBound { key: label(&key) });
        }

        debug!(key = %key, hash = key.combined_hash(), "binding declared");
        self.entries.insert(key, value);
        Ok(())
    }

    /// Bind a value, replacing any existing binding for an equal key
    ///
    /// A replaced binding keeps its original key and position.
    pub fn rebind(&mut self, key: Key<K, A>, value: V) -> Option<V> {
        debug!(key = %key, hash = key.combined_hash(), "binding replaced");
        self.entries.insert(key, value)
    }

    /// Look up the value bound to `key`
    pub fn get(&self, key: &Key<K, A>) -> Option<&V> {
        let found = self.entries.get(key);
        trace!(key = %key, hash = key.combined_hash(), found = found.is_some(), "binding lookup");
        found
    }

    /// Look up the value bound to `key`, failing if there is none
    pub fn require(&self, key: &Key<K, A>) -> BindingResult<&V> {
        self.get(key)
            .ok_or_else(|| BindingError::NotBound { key: label(key) })
    }

    /// Check whether `key` is bound
    pub fn contains(&self, key: &Key<K, A>) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove the binding for `key`, keeping the order of the rest
    pub fn unbind(&mut self, key: &Key<K, A>) -> Option<V> {
        let removed = self.entries.shift_remove(key);
        if removed.is_some() {
            debug!(key = %key, hash = key.combined_hash(), "binding removed");
        }
        removed
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &Key<K, A>> {
        self.entries.keys()
    }

    /// Bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&Key<K, A>, &V)> {
        self.entries.iter()
    }

    /// All annotations bound for `kind`, in declaration order
    pub fn annotations_for(&self, kind: &K) -> Vec<&A>
    where
        K: PartialEq,
    {
        self.entries
            .keys()
            .filter(|key| key.kind() == kind)
            .map(|key| key.annotation())
            .collect()
    }
}

impl<V, K, A> Default for BindingTable<V, K, A>
where
    K: Hash + fmt::Display,
    A: Hash + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, K: fmt::Debug, A: fmt::Debug> fmt::Debug for BindingTable<V, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
