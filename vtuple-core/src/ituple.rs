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

//! Arity-agnostic access to tuples.

use core::any::Any;
use core::iter::FusedIterator;

use crate::TupleError;

/// Positional, type-erased read access to a tuple whose arity isn't known statically.
///
/// This is what destructuring facilities work against: they ask for [`ITuple::len`], then fetch
/// each slot with [`ITuple::get`].
pub trait ITuple {
    /// The number of slots in the tuple.
    fn len(&self) -> usize;
    /// Whether the tuple has no slots at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// The slot at position `index`.
    ///
    /// # Errors
    /// [`TupleError::IndexOutOfRange`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<&dyn Any, TupleError>;
}

impl<'a> dyn ITuple + 'a {
    /// Iterates over the tuple's slots, in order.
    pub fn slots(&self) -> Slots<'_> {
        Slots {
            tuple: self,
            next: 0,
        }
    }
    /// The slot at position `index`, if it is a `T`.
    ///
    /// # Errors
    /// [`TupleError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get_as<T: Any>(&self, index: usize) -> Result<Option<&T>, TupleError> {
        self.get(index).map(|slot| slot.downcast_ref())
    }
}

/// An iterator over the slots of an [`ITuple`].
#[derive(Clone, Copy)]
pub struct Slots<'a> {
    tuple: &'a dyn ITuple,
    next: usize,
}
impl<'a> Iterator for Slots<'a> {
    type Item = &'a dyn Any;
    fn next(&mut self) -> Option<Self::Item> {
        let tuple = self.tuple;
        let len = tuple.len();
        if self.next >= len {
            return None;
        }
        match tuple.get(self.next) {
            Ok(slot) => {
                self.next += 1;
                Some(slot)
            }
            Err(_) => {
                self.next = len;
                None
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tuple.len().saturating_sub(self.next)))
    }
}
impl FusedIterator for Slots<'_> {}
impl core::fmt::Debug for Slots<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slots")
            .field("len", &self.tuple.len())
            .field("next", &self.next)
            .finish()
    }
}

/// Splits `tuple` into exactly `N` type-erased slots.
///
/// Returns `None` if the tuple's arity isn't `N`, or if any of its first `N` slots can't be read.
pub fn destructure<const N: usize>(tuple: &dyn ITuple) -> Option<[&dyn Any; N]> {
    if tuple.len() != N {
        return None;
    }
    let unit: &dyn Any = &();
    let mut slots = [unit; N];
    for (index, slot) in slots.iter_mut().enumerate() {
        *slot = tuple.get(index).ok()?;
    }
    Some(slots)
}
