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

//! The core of [`vtuple`](https://crates.io/crates/vtuple): value tuples of arity 0 to 8 with
//! structural equality, ordering, hashing and rendering, and the capability traits that let
//! arity-agnostic code work with them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod comparer;
pub mod error;
pub mod hash;
pub mod ituple;
pub mod render;
pub mod structural;
pub mod tuple;

pub use comparer::{FnEqualityComparer, IComparer, IEqualityComparer};
pub use error::TupleError;
pub use hash::{hash_code_of, HashCode};
pub use ituple::{destructure, ITuple, Slots};
pub use render::Render;
pub use structural::{IComparable, IEquatable, IStructuralComparable, IStructuralEquatable};
pub use tuple::*;
