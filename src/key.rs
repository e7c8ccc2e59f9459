// Copyright 2025 Cowboy AI, LLC.

//! Composite binding key
//!
//! A [`Key`] pairs the kind a binding is declared for with an annotation that
//! tells apart several bindings of that kind. Containers build one key when a
//! binding is registered and a fresh, equal key on every lookup, so keys are
//! compared by value and never by instance.
//!
//! # Equality
//!
//! Two keys are equal when their combined hashes are equal. The combined hash
//! is `hash(kind) ^ hash(annotation)`, computed on first use and cached for the
//! lifetime of the key. Equality therefore does not compare fields: pairs whose
//! combined hashes collide are treated as the same key. Because XOR commutes,
//! `Key::new(x, y)` and `Key::new(y, x)` always collide when `x` and `y` have
//! the same type. Callers that need strict structural equality must compare
//! [`Key::kind`] and [`Key::annotation`] themselves.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use cim_binding_key::Key;
//!
//! let key = Key::new("TypeA", "tag");
//! let key2 = Key::new("TypeA", "tag");
//! assert_ne!(key.instance(), key2.instance());
//! assert_eq!(key, key2);
//!
//! let mut map = HashMap::new();
//! map.insert(key, "value");
//! assert_eq!(map.get(&key2), Some(&"value"));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::annotation::Annotation;
use crate::kind::Kind;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// Hash a single key component with fixed SipHash keys
fn component_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Composite lookup key of a kind and an annotation
///
/// The fields are fixed at construction; only the hash cache is filled later.
pub struct Key<K = Kind, A = Annotation> {
    kind: K,
    annotation: A,
    cached_hash: OnceLock<u64>,
    instance: u64,
}

impl<K, A> Key<K, A> {
    /// Create a new key. The combined hash is not computed until first needed.
    pub fn new(kind: K, annotation: A) -> Self {
        Self {
            kind,
            annotation,
            cached_hash: OnceLock::new(),
            instance: next_instance(),
        }
    }

    /// Get the kind
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Get the annotation
    pub fn annotation(&self) -> &A {
        &self.annotation
    }

    /// Per-instance token, unique within the process
    ///
    /// Only used for diagnostics; two equal keys have different instances.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Whether the combined hash has been computed yet
    pub fn is_hash_cached(&self) -> bool {
        self.cached_hash.get().is_some()
    }

    /// Split the key into its kind and annotation
    pub fn into_parts(self) -> (K, A) {
        (self.kind, self.annotation)
    }
}

impl<A> Key<Kind, A> {
    /// Create a key for the kind `T`
    pub fn of<T: ?Sized + 'static>(annotation: A) -> Self {
        Self::new(Kind::of::<T>(), annotation)
    }
}

impl Key<Kind, Annotation> {
    /// Create a key for the kind `T` with no qualifier
    pub fn unqualified<T: ?Sized + 'static>() -> Self {
        Self::new(Kind::of::<T>(), Annotation::Unqualified)
    }
}

impl<K: Hash, A: Hash> Key<K, A> {
    /// Combined hash: `hash(kind) ^ hash(annotation)`, memoized
    pub fn combined_hash(&self) -> u64 {
        *self
            .cached_hash
            .get_or_init(|| component_hash(&self.kind) ^ component_hash(&self.annotation))
    }
}

impl<K: fmt::Display, A: fmt::Display> Key<K, A> {
    /// Human readable form for logs and error messages
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<K: Hash, A: Hash> PartialEq for Key<K, A> {
    fn eq(&self, other: &Self) -> bool {
        self.combined_hash() == other.combined_hash()
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.combined_hash() != other.combined_hash()
    }
}

impl<K: Hash, A: Hash> Eq for Key<K, A> {}

impl<K: Hash, A: Hash> Hash for Key<K, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}

impl<K: Clone, A: Clone> Clone for Key<K, A> {
    /// Clones are distinct instances; an already computed hash carries over.
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            annotation: self.annotation.clone(),
            cached_hash: self.cached_hash.clone(),
            instance: next_instance(),
        }
    }
}

impl<K: fmt::Debug, A: fmt::Debug> fmt::Debug for Key<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("kind", &self.kind)
            .field("annotation", &self.annotation)
            .field("hash", &self.cached_hash.get())
            .field("instance", &self.instance)
            .finish()
    }
}

impl<K: fmt::Display, A: fmt::Display> fmt::Display for Key<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Key for \"{}\" annotated with \"{}\" at #{}>",
            self.kind, self.annotation, self.instance
        )
    }
}

#[cfg(feature = "serde")]
impl<K: Serialize, A: Serialize> Serialize for Key<K, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Key", 2)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("annotation", &self.annotation)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Deserialize<'de>, A: Deserialize<'de>> Deserialize<'de> for Key<K, A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts<K, A> {
            kind: K,
            annotation: A,
        }

        let parts = Parts::<K, A>::deserialize(deserializer)?;
        Ok(Key::new(parts.kind, parts.annotation))
    }
}
