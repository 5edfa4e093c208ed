//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use std::any::Any;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use vtuple::prelude::*;
use vtuple::{destructure, Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple8, TupleError};

#[test]
fn the_macro_picks_the_arity() {
    assert_eq!(vtuple!(), Tuple0());
    assert_eq!(vtuple!(1), Tuple1(1));
    assert_eq!(vtuple!(1, 'b',), Tuple2(1, 'b'));
    assert_eq!(
        vtuple!(1, 2, 3, 4, 5, 6, 7, 8),
        Tuple8(1, 2, 3, 4, 5, 6, 7, 8)
    );
    assert_eq!(Tuple8::<u8, u8, u8, u8, u8, u8, u8, u8>::LEN, 8);
}

#[test]
fn zero_arity_tuples_are_all_the_same() {
    let a = vtuple!();
    let b = Tuple0::default();
    assert_eq!(a, b);
    assert!(a.equals(&b));
    assert_eq!(a.compare_to(Some(&b)), Ok(Ordering::Equal));
    assert_eq!(a.hash_code(), 0);
    assert_eq!(b.to_string(), "()");
    assert_eq!(a.len(), 0);
    assert!(a.get(0).is_err());
}

#[test]
fn all_eight_slots_are_indexed() {
    let tuple = vtuple!(0u8, 1u16, 2u32, 3u64, 4i8, 5i16, 6i32, 7i64);
    let erased: &dyn ITuple = &tuple;
    assert_eq!(erased.len(), 8);
    let rendered: Vec<String> = erased
        .slots()
        .map(|slot| {
            if let Some(v) = slot.downcast_ref::<u8>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<u16>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<u32>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<u64>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<i8>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<i16>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<i32>() {
                v.to_string()
            } else if let Some(v) = slot.downcast_ref::<i64>() {
                v.to_string()
            } else {
                unreachable!()
            }
        })
        .collect();
    assert_eq!(rendered, ["0", "1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(
        erased.get(8).err(),
        Some(TupleError::IndexOutOfRange { index: 8, len: 8 })
    );
}

#[test]
fn destructuring_checks_the_arity() {
    let tuple = vtuple!("key", 12u16);
    match destructure::<2>(&tuple) {
        Some([key, value]) => {
            assert_eq!(key.downcast_ref::<&str>(), Some(&"key"));
            assert_eq!(value.downcast_ref::<u16>(), Some(&12));
        }
        None => panic!("a pair should destructure into two slots"),
    }
    assert!(destructure::<1>(&tuple).is_none());
}

#[test]
fn tuples_are_keys_and_set_elements() {
    let mut scores = HashMap::new();
    scores.insert(vtuple!("alice", 1), 10);
    scores.insert(vtuple!("bob", 1), 20);
    *scores.entry(vtuple!("alice", 1)).or_insert(0) += 5;
    assert_eq!(scores[&vtuple!("alice", 1)], 15);
    assert_eq!(scores.len(), 2);

    let unique: HashSet<_> = [vtuple!(1, 2), vtuple!(1, 2), vtuple!(2, 1)].into();
    assert_eq!(unique.len(), 2);

    let sorted: BTreeSet<_> = [vtuple!(2, 'a'), vtuple!(1, 'z'), vtuple!(1, 'b')].into();
    assert_eq!(
        sorted.into_iter().collect::<Vec<_>>(),
        [vtuple!(1, 'b'), vtuple!(1, 'z'), vtuple!(2, 'a')]
    );
}

#[test]
fn mismatched_operands() {
    let tuple = vtuple!(1, 2);
    assert!(!tuple.equals(&vtuple!(1, 2, 3)));
    assert!(!tuple.equals(&"(1, 2)"));
    assert!(matches!(
        tuple.compare_to(Some(&vtuple!(1u8, 2u8))),
        Err(TupleError::TypeMismatch {
            argument: "other",
            ..
        })
    ));
    assert_eq!(tuple.compare_to(None), Ok(Ordering::Greater));
}

#[test]
fn nested_tuples() {
    let nested = vtuple!(vtuple!(1, Some("a")), vtuple!(), None::<Tuple1<u8>>);
    assert_eq!(nested.to_string(), "((1, a), (), )");
    assert_eq!(
        nested.hash_code(),
        Tuple3(vtuple!(1, Some("a")).hash_code(), 0, 0).hash_code()
    );
    assert!(vtuple!(vtuple!(1, 2), 0) < vtuple!(vtuple!(1, 3), 0));
}

#[test]
fn slots_are_mutable_in_place() {
    let mut tuple = vtuple!(1, String::from("a"), None::<u8>);
    let copy = tuple.clone();
    tuple.0 += 1;
    tuple.1.push('b');
    tuple.2 = Some(3);
    assert_eq!(tuple.to_string(), "(2, ab, 3)");
    assert_eq!(copy.to_string(), "(1, a, )");
    assert_ne!(tuple, copy);
}

#[test]
fn case_insensitive_comparer() {
    fn key(value: &dyn Any) -> String {
        value
            .downcast_ref::<&str>()
            .map(|s| s.to_lowercase())
            .unwrap_or_default()
    }
    let comparer = vtuple::FnEqualityComparer::new(
        |a: &dyn Any, b: &dyn Any| key(a) == key(b),
        |value: &dyn Any| key(value).hash_code(),
    );
    let by_key = |a: &dyn Any, b: &dyn Any| key(a).cmp(&key(b));

    let a = Tuple4("A", "b", "C", "d");
    let b = Tuple4("a", "B", "c", "D");
    assert!(a != b);
    assert!(a.structural_eq(&b, &comparer));
    assert_eq!(a.structural_hash(&comparer), b.structural_hash(&comparer));
    assert_eq!(a.structural_cmp(Some(&b), &by_key), Ok(Ordering::Equal));
    assert_eq!(
        a.structural_cmp(Some(&Tuple4("a", "b", "c", "E")), &by_key),
        Ok(Ordering::Less)
    );
    assert!(a.structural_cmp(Some(&vtuple!("a")), &by_key).is_err());
}
