// Copyright 2025 Cowboy AI, LLC.

//! # CIM Binding Key
//!
//! Composite lookup keys for dependency-injection containers in the
//! Composable Information Machine.
//!
//! A container that allows several bindings of one type ("the primary
//! database", "the replica database") needs a key made of two parts:
//! - **Kind**: the type the binding is declared for
//! - **Annotation**: the qualifier that tells bindings of that kind apart
//!
//! [`Key`] combines both into a value object that is compared by value, so a
//! key built at lookup time finds the binding stored under an equal key built
//! at registration time. [`BindingTable`] is the ordered mapping a container
//! keeps from keys to its bindings.
//!
//! ## Design Principles
//!
//! 1. **Value semantics**: keys with equal parts are equal, whatever instance
//! 2. **Immutability**: parts are fixed at construction, only the hash is cached
//! 3. **Hash identity**: equality is combined-hash equality, see [`Key`]
//!
//! ```
//! use cim_binding_key::{Annotation, BindingTable, Key};
//!
//! struct Database;
//!
//! let mut table = BindingTable::new();
//! table.bind(Key::of::<Database>(Annotation::named("primary")), "postgres://primary")?;
//! table.bind(Key::unqualified::<Database>(), "postgres://default")?;
//!
//! let url = table.require(&Key::of::<Database>(Annotation::named("primary")))?;
//! assert_eq!(*url, "postgres://primary");
//! # Ok::<(), cim_binding_key::BindingError>(())
//! ```

#![warn(missing_docs)]

mod annotation;
mod bindings;
mod errors;
mod key;
mod kind;

pub use annotation::Annotation;
pub use bindings::BindingTable;
pub use errors::{BindingError, BindingResult};
pub use key::Key;
pub use kind::Kind;
