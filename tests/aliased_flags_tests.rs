//! End-to-end checks through the `allium` facade.
//!
//! Covers:
//! - name and alias lookup on plain and flag sets
//! - composite identity and union
//! - construction failures
//! - definition tables loaded from disk

use std::sync::Arc;

use allium::table::{TableDocument, TableError};
use allium::{BuildError, CollisionTarget, EnumSet, FlagSet, KindError, SetKind, aliased, auto};
use rayon::prelude::*;

fn my_flag() -> FlagSet<u32> {
    FlagSet::builder()
        .declare("x", auto(["foo"]).unwrap())
        .declare("y", auto(["bar"]).unwrap())
        .declare("z", auto(["baz"]).unwrap())
        .build()
        .expect("MyFlag builds")
}

#[test]
fn test_names_and_aliases_resolve_to_one_member() {
    let flags = my_flag();
    let x = flags.lookup("x").unwrap();
    assert!(Arc::ptr_eq(flags.lookup("foo").unwrap(), x));
    assert!(Arc::ptr_eq(flags.get("x").unwrap(), x));
    assert!(flags.lookup("qux").is_none());
    assert!(flags.lookup("FOO").is_none());
}

#[test]
fn test_union_equals_integer_value() {
    let flags = my_flag();
    let x = flags.get("x").unwrap();
    let z = flags.get("z").unwrap();
    assert_eq!(*flags.union(x, z).value(), 0b101);
    assert_eq!(*flags.union(flags.get("foo").unwrap(), flags.get("baz").unwrap()).value(), 5);
}

#[test]
fn test_from_str_matches_union() {
    let flags = my_flag();
    let parsed = flags.parse("foo, bar", ", ").unwrap();
    let union = flags.union(flags.get("x").unwrap(), flags.get("y").unwrap());
    assert!(Arc::ptr_eq(&parsed, &union));
    assert_eq!(flags.render(&parsed), "x|y");
}

#[test]
fn test_decompose_and_canonical_identity() {
    let flags = my_flag();
    let decomposed = flags.decompose(0b101);
    let names: Vec<&str> = decomposed.iter().filter_map(|m| m.name()).collect();
    assert_eq!(names, ["x", "z"]);

    for member in &flags {
        assert!(Arc::ptr_eq(&flags.composite(*member.value()), member));
    }
}

#[test]
fn test_composite_union_is_homomorphic() {
    let flags = my_flag();
    for a in 0u32..8 {
        for b in 0u32..8 {
            let joined = flags.union(&flags.composite(a), &flags.composite(b));
            assert!(Arc::ptr_eq(&joined, &flags.composite(a | b)));
        }
    }
}

#[test]
fn test_concurrent_composites_share_one_instance() {
    let flags = my_flag();
    let members: Vec<_> = (0..64).into_par_iter().map(|_| flags.composite(0b110)).collect();
    assert!(members.iter().all(|m| Arc::ptr_eq(m, &members[0])));
    assert_eq!(flags.composite_count(), 1);
}

#[test]
fn test_auto_sequences() {
    let plain = EnumSet::<u32>::builder()
        .auto("a")
        .auto("b")
        .auto("c")
        .build()
        .unwrap();
    let values: Vec<u32> = plain.iter().map(|m| *m.value()).collect();
    assert_eq!(values, [1, 2, 3]);
    assert_eq!(plain.kind(), SetKind::Plain);

    let flags = my_flag();
    let values: Vec<u32> = flags.iter().map(|m| *m.value()).collect();
    assert_eq!(values, [1, 2, 4]);
}

#[test]
fn test_construction_failures() {
    let duplicate = EnumSet::<u32>::builder().value("a", 3).value("b", 3).build();
    assert!(matches!(duplicate, Err(BuildError::DuplicateValue { .. })));

    let collision = EnumSet::<u32>::builder()
        .declare("a", aliased(1, ["x"]).unwrap())
        .value("x", 2)
        .build();
    assert_eq!(
        collision.unwrap_err(),
        BuildError::Collision {
            alias: "x".to_string(),
            member: "a".to_string(),
            target: CollisionTarget::Name("x".to_string()),
        }
    );
}

#[test]
fn test_table_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    std::fs::write(
        &path,
        r#"{ "sets": [ { "name": "MyFlag", "kind": "flag", "members": [
            { "name": "x", "aliases": ["foo"] },
            { "name": "y", "aliases": ["bar"] },
            { "name": "z", "aliases": ["baz"] } ] } ] }"#,
    )
    .unwrap();

    let document = TableDocument::from_path(&path).unwrap();
    let loaded = document.set("MyFlag").unwrap().load().unwrap();
    let flags = loaded.as_flags().unwrap();
    assert_eq!(*flags.parse("foo, bar", ", ").unwrap().value(), 0b011);
    assert_eq!(
        loaded.as_plain().unwrap_err(),
        KindError::InvalidKind {
            expected: SetKind::Plain,
            found: SetKind::Flag,
        }
    );
    assert!(matches!(document.set("Other"), Err(TableError::UnknownSet { .. })));
}
