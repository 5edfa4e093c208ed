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
//   ZettaScale Zenoh Team, <zenoh@zettascale.tech>
//

//! The value tuples themselves, from [`Tuple0`] to [`Tuple8`].
//!
//! Slots are public fields, accessed and mutated as `tuple.0`, `tuple.1`...
//!
//! Every arity is generated from the same template by the build script, and only differs in its
//! number of slots:
//! - [`PartialEq`], [`Ord`] and [`Hash`] compare slots left to right,
//! - [`HashCode`] combines the slots' hash codes, a single slot's being passed through as is,
//! - [`Display`](core::fmt::Display) renders `(a, b, c)`, with absent slots rendering as nothing,
//! - [`ITuple`] exposes the slots to arity-agnostic code.

/// Conversion from a native tuple to the value tuple with the same slots.
pub trait IntoValueTuple {
    /// The corresponding value tuple.
    type Tuple;
    /// Performs the conversion.
    fn into_value_tuple(self) -> Self::Tuple;
}

/// Builds a value tuple from the native tuple holding its slots.
///
/// ```
/// # use vtuple_core::*;
/// assert_eq!(create((6,)), Tuple1(6));
/// assert_eq!(create(()), Tuple0());
/// ```
pub fn create<T: IntoValueTuple>(slots: T) -> T::Tuple {
    slots.into_value_tuple()
}

#[allow(unused_variables, clippy::unused_unit)]
mod generated {
    use super::IntoValueTuple;
    use crate::hash::combine;
    use crate::render::render_slots;
    use crate::structural::operand;
    use crate::*;
    use core::any::Any;
    use core::cmp::Ordering;
    include!(concat!(env!("OUT_DIR"), "/tuples.rs"));
}
pub use generated::*;
