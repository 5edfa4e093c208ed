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

//! Externally supplied slot comparers.
//!
//! The structural operations hand every slot to the comparer as a `&dyn Any`, since the slots of
//! a tuple don't share a type. Comparers are expected to downcast what they know how to handle.

use core::any::Any;
use core::cmp::Ordering;

/// An equality definition for slots, used by [`IStructuralEquatable`](crate::IStructuralEquatable).
///
/// `equals(a, b)` must imply `hash_code(a) == hash_code(b)`.
pub trait IEqualityComparer {
    /// Whether `a` and `b` are equal.
    fn equals(&self, a: &dyn Any, b: &dyn Any) -> bool;
    /// The hash code of `value`.
    fn hash_code(&self, value: &dyn Any) -> i32;
}

/// A three-way comparison for slots, used by [`IStructuralComparable`](crate::IStructuralComparable).
pub trait IComparer {
    /// The ordering of `a` relative to `b`.
    fn compare(&self, a: &dyn Any, b: &dyn Any) -> Ordering;
}

impl<F: Fn(&dyn Any, &dyn Any) -> Ordering + ?Sized> IComparer for F {
    fn compare(&self, a: &dyn Any, b: &dyn Any) -> Ordering {
        self(a, b)
    }
}

/// An [`IEqualityComparer`] built from a pair of closures.
#[derive(Debug, Clone, Copy)]
pub struct FnEqualityComparer<E, H> {
    equals: E,
    hash_code: H,
}
impl<E, H> FnEqualityComparer<E, H>
where
    E: Fn(&dyn Any, &dyn Any) -> bool,
    H: Fn(&dyn Any) -> i32,
{
    /// Pairs an equality predicate with a hash function consistent with it.
    pub const fn new(equals: E, hash_code: H) -> Self {
        Self { equals, hash_code }
    }
}
impl<E, H> IEqualityComparer for FnEqualityComparer<E, H>
where
    E: Fn(&dyn Any, &dyn Any) -> bool,
    H: Fn(&dyn Any) -> i32,
{
    fn equals(&self, a: &dyn Any, b: &dyn Any) -> bool {
        (self.equals)(a, b)
    }
    fn hash_code(&self, value: &dyn Any) -> i32 {
        (self.hash_code)(value)
    }
}
