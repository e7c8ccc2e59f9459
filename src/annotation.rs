// Copyright 2025 Cowboy AI, LLC.

//! Qualifier values that tell apart several bindings of the same kind

use std::any::type_name;
use std::fmt;

#[cfg(feature = "serde")]
use schemars::JsonSchema;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Annotation attached to a binding key
///
/// Most bindings carry no qualifier and use [`Annotation::Unqualified`].
/// Named, indexed and marker-type qualifiers cover the usual ways of
/// declaring "the primary database" next to "the replica database".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, JsonSchema))]
pub enum Annotation {
    /// No qualifier given
    #[default]
    Unqualified,
    /// Qualified by name (e.g. "primary")
    Named(String),
    /// Qualified by position (e.g. the n-th worker)
    Indexed(i64),
    /// Qualified by a marker type, stored by its type name
    Marker(String),
}

impl Annotation {
    /// Create a named annotation
    pub fn named(name: impl Into<String>) -> Self {
        Annotation::Named(name.into())
    }

    /// Create a marker-type annotation for `T`
    pub fn marker<T: ?Sized + 'static>() -> Self {
        Annotation::Marker(type_name::<T>().to_string())
    }

    /// Check if this is the default sentinel
    pub fn is_unqualified(&self) -> bool {
        matches!(self, Annotation::Unqualified)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Unqualified => f.write_str("unqualified"),
            Annotation::Named(name) => f.write_str(name),
            Annotation::Indexed(index) => write!(f, "#{index}"),
            Annotation::Marker(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Annotation {
    fn from(name: &str) -> Self {
        Annotation::Named(name.to_string())
    }
}

impl From<String> for Annotation {
    fn from(name: String) -> Self {
        Annotation::Named(name)
    }
}

impl From<i64> for Annotation {
    fn from(index: i64) -> Self {
        Annotation::Indexed(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Primary;

    #[test]
    fn test_default_is_unqualified() {
        assert_eq!(Annotation::default(), Annotation::Unqualified);
        assert!(Annotation::default().is_unqualified());
        assert!(!Annotation::named("primary").is_unqualified());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Annotation::from("primary"), Annotation::named("primary"));
        assert_eq!(
            Annotation::from(String::from("replica")),
            Annotation::Named("replica".to_string())
        );
        assert_eq!(Annotation::from(3), Annotation::Indexed(3));
    }

    #[test]
    fn test_variants_do_not_alias() {
        // same text, different qualifier type
        let named = Annotation::named(type_name::<Primary>());
        let marker = Annotation::marker::<Primary>();
        assert_ne!(named, marker);
        assert_eq!(marker, Annotation::Marker(type_name::<Primary>().to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Annotation::Unqualified.to_string(), "unqualified");
        assert_eq!(Annotation::named("primary").to_string(), "primary");
        assert_eq!(Annotation::Indexed(-2).to_string(), "#-2");
        assert!(Annotation::marker::<Primary>().to_string().ends_with("Primary"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_schema_lists_variants() {
        let schema = schemars::schema_for!(Annotation);
        let json = serde_json::to_string(&schema).unwrap();

        for variant in ["Unqualified", "Named", "Indexed", "Marker"] {
            assert!(json.contains(variant), "schema is missing {variant}");
        }
    }
}
