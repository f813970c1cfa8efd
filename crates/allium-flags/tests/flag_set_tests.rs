use super::*;
use allium_core::{BuildError, aliased, auto};
use rayon::prelude::*;

fn xyz() -> FlagSet<u32> {
    FlagSet::builder()
        .declare("x", auto(["foo"]).unwrap())
        .declare("y", auto(["bar"]).unwrap())
        .declare("z", auto(["baz"]).unwrap())
        .build()
        .expect("xyz builds")
}

fn names(members: &[MemberRef<u32>]) -> Vec<&str> {
    members.iter().filter_map(|m| m.name()).collect()
}

#[test]
fn test_auto_values_are_powers_of_two() {
    let set = xyz();
    let values: Vec<u32> = set.iter().map(|m| *m.value()).collect();
    assert_eq!(values, [1, 2, 4]);
    assert_eq!(set.kind(), SetKind::Flag);
    assert_eq!(set.mask(), 0b111);
}

#[test]
fn test_alias_and_name_resolve_to_same_member() {
    let set = xyz();
    assert!(Arc::ptr_eq(
        set.lookup("foo").unwrap(),
        set.lookup("x").unwrap()
    ));
}

#[test]
fn test_decompose_ascending_bits() {
    let set = xyz();
    assert_eq!(names(&set.decompose(0b101)), ["x", "z"]);
    assert_eq!(names(&set.decompose(0b111)), ["x", "y", "z"]);
    assert!(set.decompose(0).is_empty());
}

#[test]
fn test_decompose_orders_by_bit_not_declaration() {
    let set = FlagSet::<u16>::builder()
        .value("high", 8)
        .value("low", 1)
        .value("mid", 4)
        .build()
        .expect("set builds");
    let decomposed = set.decompose(0b1101);
    let names: Vec<&str> = decomposed.iter().filter_map(|m| m.name()).collect();
    assert_eq!(names, ["low", "mid", "high"]);
}

#[test]
fn test_decompose_ignores_uncovered_bits_but_composite_keeps_them() {
    let set = xyz();
    assert_eq!(names(&set.decompose(0b1001)), ["x"]);
    let composite = set.composite(0b1001);
    assert_eq!(*composite.value(), 0b1001);
    assert_eq!(set.uncovered(0b1001), 0b1000);
    assert_eq!(set.render(&composite), "x|8");
}

#[test]
fn test_union_of_aliases() {
    let set = xyz();
    let foo = set.get("foo").unwrap();
    let baz = set.get("baz").unwrap();
    let union = set.union(foo, baz);
    assert_eq!(*union.value(), 5);
    assert!(union.is_composite());
    assert_eq!(union.name(), None);
    assert!(union.aliases().is_empty());
}

#[test]
fn test_composite_identity_is_stable() {
    let set = xyz();
    let first = set.composite(0b110);
    let second = set.composite(0b110);
    assert!(Arc::ptr_eq(&first, &second));

    let via_union = set.union(set.get("y").unwrap(), set.get("z").unwrap());
    assert!(Arc::ptr_eq(&first, &via_union));
    assert_eq!(set.composite_count(), 1);
}

#[test]
fn test_composite_of_canonical_value_is_the_canonical_member() {
    let set = xyz();
    for member in &set {
        assert!(Arc::ptr_eq(&set.composite(*member.value()), member));
    }
    assert_eq!(set.composite_count(), 0);
}

#[test]
fn test_union_matches_integer_or() {
    let set = xyz();
    for v1 in 0..16_u32 {
        for v2 in 0..16_u32 {
            let a = set.composite(v1);
            let b = set.composite(v2);
            let ab = set.union(&a, &b);
            let ba = set.union(&b, &a);
            assert!(Arc::ptr_eq(&ab, &set.composite(v1 | v2)));
            assert!(Arc::ptr_eq(&ab, &ba));
        }
    }
}

#[test]
fn test_union_is_associative() {
    let set = xyz();
    let (x, y, z) = (set.composite(1), set.composite(2), set.composite(12));
    let left = set.union(&set.union(&x, &y), &z);
    let right = set.union(&x, &set.union(&y, &z));
    assert!(Arc::ptr_eq(&left, &right));
    assert_eq!(*left.value(), 15);
}

#[test]
fn test_zero_is_a_cached_composite() {
    let set = xyz();
    let empty = set.empty();
    assert_eq!(*empty.value(), 0);
    assert!(empty.is_composite());
    assert!(Arc::ptr_eq(&empty, &set.composite(0)));
    assert_eq!(set.render(&empty), "0");
}

#[test]
fn test_bitwise_algebra() {
    let set = xyz();
    let xy = set.composite(0b011);
    let yz = set.composite(0b110);

    assert_eq!(*set.intersection(&xy, &yz).value(), 0b010);
    assert!(Arc::ptr_eq(
        &set.intersection(&xy, &yz),
        set.get("y").unwrap()
    ));
    assert_eq!(*set.difference(&xy, &yz).value(), 0b001);
    assert_eq!(*set.symmetric_difference(&xy, &yz).value(), 0b101);
    assert_eq!(*set.complement(&xy).value(), 0b100);
    assert_eq!(*set.complement(&set.composite(0b1011)).value(), 0b100);
    assert!(Arc::ptr_eq(&set.complement(&set.empty()), &set.all()));

    assert!(set.contains(&xy, set.get("x").unwrap()));
    assert!(!set.contains(&xy, &yz));
    assert!(set.contains(&xy, &set.empty()));
}

#[test]
fn test_union_all() {
    let set = xyz();
    let members = [set.get("x").unwrap(), set.get("baz").unwrap()];
    let union = set.union_all(members.iter().map(|m| &***m));
    assert_eq!(*union.value(), 0b101);
    assert!(Arc::ptr_eq(&set.union_all(std::iter::empty()), &set.empty()));
}

#[test]
fn test_parse_names_and_aliases() {
    let set = xyz();
    let parsed = set.parse("foo, bar", ", ").unwrap();
    let expected = set.union(set.get("x").unwrap(), set.get("y").unwrap());
    assert!(Arc::ptr_eq(&parsed, &expected));

    assert!(Arc::ptr_eq(&set.parse("z", ", ").unwrap(), set.get("z").unwrap()));
    assert!(Arc::ptr_eq(&set.parse("", ", ").unwrap(), &set.empty()));
    assert_eq!(*set.parse("x|z", "|").unwrap().value(), 0b101);
    assert_eq!(
        set.parse("foo, nope", ", ").unwrap_err(),
        LookupError::NotFound {
            key: "nope".to_string()
        }
    );
}

#[test]
fn test_render() {
    let set = xyz();
    assert_eq!(set.render(set.get("bar").unwrap()), "y");
    assert_eq!(set.render(&set.composite(0b101)), "x|z");
    assert_eq!(set.render(&set.all()), "x|y|z");
    assert_eq!(set.render(&set.composite(0b1000)), "8");
}

#[test]
fn test_shared_bit_alias_declaration() {
    let set = FlagSet::<u8>::builder()
        .declare("read", auto(["r"]).unwrap())
        .declare("view", aliased(1, ["v"]).unwrap())
        .auto("write")
        .build()
        .expect("set builds");
    assert_eq!(set.len(), 2);
    let decomposed = set.decompose(0b11);
    let names: Vec<Option<&str>> = decomposed.iter().map(|m| m.name()).collect();
    assert_eq!(names, [Some("read"), Some("write")]);
    assert!(Arc::ptr_eq(set.get("v").unwrap(), set.get("read").unwrap()));
}

#[test]
fn test_multi_bit_member_is_rejected() {
    let err = FlagSet::<u8>::builder()
        .auto("a")
        .value("ab", 3)
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::NotSingleBit { .. }));
}

#[test]
fn test_alias_collision_in_flag_set() {
    let err = FlagSet::<u8>::builder()
        .declare("a", auto(["x"]).unwrap())
        .auto("x")
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::Collision { .. }));
}

#[test]
fn test_concurrent_composites_share_one_instance() {
    let set = Arc::new(xyz());

    let results: Vec<MemberRef<u32>> = (0..4000_u32)
        .into_par_iter()
        .map(|i| set.composite(8 + (i % 8)))
        .collect();

    for (i, member) in results.iter().enumerate() {
        let expected = set.composite(8 + (i as u32 % 8));
        assert!(Arc::ptr_eq(member, &expected));
    }
    assert_eq!(set.composite_count(), 8);
}

#[test]
fn test_concurrent_lookup_and_decompose() {
    let set = xyz();
    let keys = ["x", "foo", "y", "bar", "z", "baz"];

    let values: Vec<u32> = (0..600)
        .into_par_iter()
        .map(|i| {
            let member = set.get(keys[i % keys.len()]).unwrap();
            let decomposed = set.decompose(*member.value() | 0b1000);
            assert_eq!(decomposed.len(), 1);
            *member.value()
        })
        .collect();

    assert_eq!(values.iter().filter(|&&v| v == 1).count(), 200);
    assert_eq!(values.iter().filter(|&&v| v == 4).count(), 200);
}
