// Copyright 2025 Cowboy AI, LLC.

//! Type identity tokens used as the `kind` half of a binding key

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind - the type a binding is declared for
///
/// Identity is the [`TypeId`]; the type name is carried for diagnostics only
/// and never participates in equality or hashing.
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

impl Kind {
    /// Capture the kind of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Get the underlying type id
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Get the fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this kind is `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self.name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
