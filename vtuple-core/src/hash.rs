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

//! Stable 32-bit hash codes.
//!
//! Unlike [`core::hash::Hash`], whose output depends on the hasher it is fed to, a [`HashCode`]
//! is a fixed function of the value: a tuple's hash code is computed from its slots' hash codes
//! only, so that two equal tuples always share their hash code regardless of context.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// A type that can produce a deterministic 32-bit hash code.
///
/// Implementations must be consistent with equality: `a == b` implies `a.hash_code() == b.hash_code()`.
pub trait HashCode {
    /// Returns the hash code of `self`.
    fn hash_code(&self) -> i32;
}

/// Folds a 64 bit hash down to 32 bits.
pub const fn fold(hash: u64) -> i32 {
    (hash ^ (hash >> 32)) as i32
}

/// Hashes any [`Hash`] value deterministically.
///
/// Useful to implement [`HashCode`] for types that already derive [`Hash`].
pub fn hash_code_of<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    fold(hasher.finish())
}

/// Combines a sequence of hash codes in an order-sensitive way.
///
/// An empty sequence hashes to `0`, and a single hash code is returned unchanged.
pub fn combine<I: IntoIterator<Item = i32>>(hashes: I) -> i32 {
    let mut hashes = hashes.into_iter();
    let Some(first) = hashes.next() else {
        return 0;
    };
    let Some(second) = hashes.next() else {
        return first;
    };
    let mut hasher = FxHasher::default();
    hasher.write_i32(first);
    hasher.write_i32(second);
    for hash in hashes {
        hasher.write_i32(hash);
    }
    fold(hasher.finish())
}

macro_rules! hash_code_as_i32 {
    ($($t: ty),*) => {
        $(impl HashCode for $t {
            fn hash_code(&self) -> i32 {
                *self as i32
            }
        })*
    };
}
hash_code_as_i32!(i8, i16, i32, u8, u16, u32, char);

macro_rules! hash_code_folded {
    ($($t: ty),*) => {
        $(impl HashCode for $t {
            fn hash_code(&self) -> i32 {
                fold(*self as u64)
            }
        })*
    };
}
hash_code_folded!(i64, u64, isize, usize);

impl HashCode for i128 {
    fn hash_code(&self) -> i32 {
        (*self as u128).hash_code()
    }
}
impl HashCode for u128 {
    fn hash_code(&self) -> i32 {
        fold(*self as u64) ^ fold((*self >> 64) as u64)
    }
}
impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}
// `0.0 == -0.0`, so both must share a hash code.
impl HashCode for f32 {
    fn hash_code(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            self.to_bits() as i32
        }
    }
}
impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            fold(self.to_bits())
        }
    }
}
impl HashCode for () {
    fn hash_code(&self) -> i32 {
        0
    }
}
impl HashCode for str {
    fn hash_code(&self) -> i32 {
        hash_code_of(self)
    }
}
impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        combine(self.iter().map(HashCode::hash_code))
    }
}
impl<T: HashCode, const N: usize> HashCode for [T; N] {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}
/// Absent values hash to `0`.
impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        match self {
            Some(value) => value.hash_code(),
            None => 0,
        }
    }
}
impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}
impl<T: HashCode + ?Sized> HashCode for &mut T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::HashCode;
    use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};

    impl HashCode for String {
        fn hash_code(&self) -> i32 {
            self.as_str().hash_code()
        }
    }
    impl<T: HashCode> HashCode for Vec<T> {
        fn hash_code(&self) -> i32 {
            self.as_slice().hash_code()
        }
    }
    impl<T: HashCode + ?Sized> HashCode for Box<T> {
        fn hash_code(&self) -> i32 {
            (**self).hash_code()
        }
    }
    impl<T: HashCode + ?Sized> HashCode for Rc<T> {
        fn hash_code(&self) -> i32 {
            (**self).hash_code()
        }
    }
    impl<T: HashCode + ?Sized> HashCode for Arc<T> {
        fn hash_code(&self) -> i32 {
            (**self).hash_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_hash_to_themselves() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((-1i8).hash_code(), -1);
        assert_eq!('a'.hash_code(), 97);
        assert_eq!(true.hash_code(), 1);
    }

    #[test]
    fn combine_edge_cases() {
        assert_eq!(combine([]), 0);
        assert_eq!(combine([1234]), 1234);
        assert_eq!(combine([1, 2]), combine([1, 2]));
        assert_ne!(combine([1, 2]), combine([2, 1]));
    }

    #[test]
    fn absent_values_hash_to_zero() {
        assert_eq!(None::<u64>.hash_code(), 0);
        assert_eq!(Some(7u64).hash_code(), 7u64.hash_code());
    }

    #[test]
    fn signed_zeroes_agree() {
        assert_eq!(0.0f64.hash_code(), (-0.0f64).hash_code());
        assert_eq!(0.0f32.hash_code(), (-0.0f32).hash_code());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn strings_are_deterministic() {
        assert_eq!("tuple".hash_code(), "tuple".hash_code());
        assert_eq!(
            "tuple".hash_code(),
            alloc::string::String::from("tuple").hash_code()
        );
    }
}
