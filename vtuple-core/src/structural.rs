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

//! Type-erased equality and ordering.
//!
//! The typed entry points are the usual [`PartialEq`], [`Ord`] and [`HashCode`](crate::HashCode);
//! the traits here accept an operand of unknown type, and optionally an external comparer that
//! replaces the slots' own definitions.

use core::any::Any;
use core::cmp::Ordering;

use crate::{IComparer, IEqualityComparer, TupleError};

/// Equality against a value of any type.
///
/// Tuples only implement it when every slot is [`Eq`], so that a tuple always equals itself.
/// Slots with a partial equality, such as floats, go through [`IStructuralEquatable`] instead:
///
/// ```compile_fail
/// use vtuple_core::{IEquatable, Tuple1};
/// let nan = Tuple1(f64::NAN);
/// nan.equals(&nan);
/// ```
pub trait IEquatable {
    /// Whether `other` has the same type as `self` and is equal to it.
    ///
    /// Never fails: values of other types are simply not equal.
    fn equals(&self, other: &dyn Any) -> bool;
}

/// Three-way comparison against a value of any type.
pub trait IComparable {
    /// The ordering of `self` relative to `other`.
    ///
    /// `None` stands for an absent operand, which `self` always sorts after.
    ///
    /// # Errors
    /// [`TupleError::TypeMismatch`] if `other` is present but isn't of the same type as `self`.
    fn compare_to(&self, other: Option<&dyn Any>) -> Result<Ordering, TupleError>;
}

/// Equality and hashing slot by slot, with the slots' definitions supplied by `comparer`.
pub trait IStructuralEquatable {
    /// Whether `other` has the same type as `self` and `comparer` deems every pair of slots equal.
    fn structural_eq(&self, other: &dyn Any, comparer: &dyn IEqualityComparer) -> bool;
    /// Combines the hash codes `comparer` assigns to each slot.
    fn structural_hash(&self, comparer: &dyn IEqualityComparer) -> i32;
}

/// Lexicographic comparison slot by slot, with the slots' ordering supplied by `comparer`.
pub trait IStructuralComparable {
    /// The ordering of `self` relative to `other`, under `comparer`.
    ///
    /// # Errors
    /// [`TupleError::TypeMismatch`] if `other` is present but isn't of the same type as `self`.
    fn structural_cmp(
        &self,
        other: Option<&dyn Any>,
        comparer: &dyn IComparer,
    ) -> Result<Ordering, TupleError>;
}

/// Resolves the right-hand side of an ordering: `Ok(None)` when absent, `Ok(Some(other))` when it is a `T`.
pub(crate) fn operand<T: Any>(other: Option<&dyn Any>) -> Result<Option<&T>, TupleError> {
    match other {
        None => Ok(None),
        Some(other) => other
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| TupleError::type_mismatch::<T>("other")),
    }
}
