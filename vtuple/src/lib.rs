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

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

pub use vtuple_core::*;
pub use vtuple_macros::{HashCode, Render};

/// Builds a value tuple of the appropriate arity from its slots.
///
/// `vtuple!()` is a [`Tuple0`], `vtuple!(a)` a [`Tuple1`], and so on up to [`Tuple8`].
#[macro_export]
macro_rules! vtuple {
    () => {
        $crate::create(())
    };
    ($($slot: expr),+ $(,)?) => {
        $crate::create(($($slot,)+))
    };
}

/// The traits needed to use value tuples, without their helpers.
pub mod prelude {
    pub use crate::{
        vtuple, HashCode, IComparable, IComparer, IEqualityComparer, IEquatable,
        IStructuralComparable, IStructuralEquatable, ITuple, IntoValueTuple, Render,
    };
}
