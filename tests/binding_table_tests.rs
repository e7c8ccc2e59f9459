// Copyright 2025 Cowboy AI, LLC.

use cim_binding_key::{Annotation, BindingError, BindingTable, Key, Kind};

trait Storage {}
struct Database;
struct Cache;

#[derive(Debug, PartialEq)]
struct Endpoint {
    url: String,
}

fn endpoint(url: &str) -> Endpoint {
    Endpoint {
        url: url.to_string(),
    }
}

fn sample_table() -> BindingTable<Endpoint> {
    let mut table = BindingTable::new();
    table
        .bind(
            Key::of::<Database>(Annotation::named("primary")),
            endpoint("postgres://primary"),
        )
        .unwrap();
    table
        .bind(
            Key::of::<Database>(Annotation::named("replica")),
            endpoint("postgres://replica"),
        )
        .unwrap();
    table
        .bind(Key::unqualified::<Cache>(), endpoint("redis://local"))
        .unwrap();
    table
}

#[test]
fn lookup_by_freshly_built_key() {
    let table = sample_table();

    let replica = table
        .require(&Key::of::<Database>(Annotation::named("replica")))
        .unwrap();
    assert_eq!(replica.url, "postgres://replica");

    let cache = table.get(&Key::unqualified::<Cache>()).unwrap();
    assert_eq!(cache.url, "redis://local");
}

#[test]
fn unqualified_and_named_bindings_are_distinct() {
    let table = sample_table();

    assert!(!table.contains(&Key::unqualified::<Database>()));
    assert!(table.contains(&Key::of::<Database>(Annotation::named("primary"))));

    let err = table
        .require(&Key::unqualified::<Database>())
        .unwrap_err();
    assert!(matches!(err, BindingError::NotBound { .. }));
}

#[test]
fn duplicate_declaration_is_an_error() {
    let mut table = sample_table();

    let result = table.bind(
        Key::of::<Database>(Annotation::named("primary")),
        endpoint("postgres://other"),
    );
    assert!(matches!(result, Err(BindingError::AlreadyBound { .. })));
    assert_eq!(
        table
            .require(&Key::of::<Database>(Annotation::named("primary")))
            .unwrap()
            .url,
        "postgres://primary"
    );
}

#[test]
fn trait_object_kinds() {
    let mut table: BindingTable<&str> = BindingTable::default();
    table
        .bind(Key::of::<dyn Storage>(Annotation::Indexed(0)), "disk-0")
        .unwrap();
    table
        .bind(Key::of::<dyn Storage>(Annotation::Indexed(1)), "disk-1")
        .unwrap();

    assert_eq!(
        table.annotations_for(&Kind::of::<dyn Storage>()),
        vec![&Annotation::Indexed(0), &Annotation::Indexed(1)]
    );
    assert_eq!(
        table.unbind(&Key::of::<dyn Storage>(Annotation::Indexed(0))),
        Some("disk-0")
    );
    assert_eq!(table.len(), 1);
}

#[test]
fn declaration_order_is_kept() {
    let table = sample_table();
    let described: Vec<String> = table
        .keys()
        .map(|key| key.annotation().to_string())
        .collect();

    assert_eq!(described, vec!["primary", "replica", "unqualified"]);
}
