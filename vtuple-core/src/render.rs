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

//! How slots appear in a tuple's canonical `(a, b, c)` rendering.

use core::fmt::{Display, Formatter, Result};

/// The rendering of a value as a tuple slot.
///
/// This is [`Display`] for most types, except that absent values (`None`) render as nothing.
pub trait Render {
    /// Writes the slot's rendering into `f`.
    fn render(&self, f: &mut Formatter<'_>) -> Result;
}

/// Writes `slots` as `(s0, s1, ...)`.
pub fn render_slots(f: &mut Formatter<'_>, slots: &[&dyn Render]) -> Result {
    f.write_str("(")?;
    for (i, slot) in slots.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        slot.render(f)?;
    }
    f.write_str(")")
}

macro_rules! render_as_display {
    ($($t: ty),*) => {
        $(impl Render for $t {
            fn render(&self, f: &mut Formatter<'_>) -> Result {
                Display::fmt(self, f)
            }
        })*
    };
}
render_as_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str
);

impl Render for () {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("()")
    }
}
impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Some(value) => value.render(f),
            None => Ok(()),
        }
    }
}
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        (**self).render(f)
    }
}
impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        (**self).render(f)
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::*;
    use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc};

    impl Render for String {
        fn render(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(self)
        }
    }
    impl<T: Render + ?Sized> Render for Box<T> {
        fn render(&self, f: &mut Formatter<'_>) -> Result {
            (**self).render(f)
        }
    }
    impl<T: Render + ?Sized> Render for Rc<T> {
        fn render(&self, f: &mut Formatter<'_>) -> Result {
            (**self).render(f)
        }
    }
    impl<T: Render + ?Sized> Render for Arc<T> {
        fn render(&self, f: &mut Formatter<'_>) -> Result {
            (**self).render(f)
        }
    }
}
