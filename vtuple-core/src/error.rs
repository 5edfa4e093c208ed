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

//! The only two ways a tuple operation can fail.

/// The error returned by the fallible tuple operations.
///
/// Equality never fails: comparing a tuple with a value of another type simply yields `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TupleError {
    /// An ordering was requested against a value that is not a tuple of the exact same type.
    #[error("argument `{argument}` must be a `{expected}`")]
    TypeMismatch {
        /// The name of the offending argument.
        argument: &'static str,
        /// The type the argument was expected to have.
        expected: &'static str,
    },
    /// A positional access fell outside of `0..len`.
    #[error("index {index} is out of range for a tuple of length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The arity of the tuple.
        len: usize,
    },
}

impl TupleError {
    /// Builds a [`TupleError::TypeMismatch`] for an `argument` that should have been a `T`.
    pub fn type_mismatch<T: ?Sized>(argument: &'static str) -> Self {
        let expected = core::any::type_name::<T>();
        #[cfg(feature = "tracing")]
        tracing::trace!(argument, expected, "tuple comparison rejected its operand");
        TupleError::TypeMismatch { argument, expected }
    }
    /// Builds a [`TupleError::IndexOutOfRange`].
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(index, len, "tuple index out of range");
        TupleError::IndexOutOfRange { index, len }
    }
}
