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

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// The largest arity for which a tuple type is generated.
const MAX_ARITY: usize = 8;

/// `f(0), f(1), ...` joined by `sep`.
fn join(arity: usize, sep: &str, f: impl Fn(usize) -> String) -> String {
    (0..arity).map(f).collect::<Vec<_>>().join(sep)
}

/// `<T0: bound, T1: bound>`, or nothing for arity 0.
fn generics(arity: usize, bound: &str) -> String {
    if arity == 0 {
        return String::new();
    }
    let params = join(arity, ", ", |i| {
        if bound.is_empty() {
            format!("T{i}")
        } else {
            format!("T{i}: {bound}")
        }
    });
    format!("<{params}>")
}

/// The native tuple with the same slots, such as `(T0, T1,)`.
fn native(arity: usize, f: impl Fn(usize) -> String) -> String {
    if arity == 0 {
        return "()".into();
    }
    format!("({},)", join(arity, ", ", f))
}

fn tuple(file: &mut impl Write, i: usize) -> std::io::Result<()> {
    let params = generics(i, "");
    let ty = format!("Tuple{i}{params}");
    let native_ty = native(i, |j| format!("T{j}"));
    let any = generics(i, "Any");
    let comparer = if i == 0 { "_comparer" } else { "comparer" };
    let bound_other = if i == 0 { "_" } else { "other" };
    writeln!(
        file,
        r##"/// A value tuple of arity {i}.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple{i}{params}({fields});

impl{params} {ty} {{
    /// The number of slots of this tuple type.
    pub const LEN: usize = {i};
    /// Builds the tuple from its slots.
    pub const fn new({args}) -> Self {{
        Self({values})
    }}
    /// Converts the tuple into the native tuple with the same slots.
    pub fn into_inner(self) -> {native_ty} {{
        {into_inner}
    }}
}}
impl{params} From<{native_ty}> for {ty} {{
    fn from(value: {native_ty}) -> Self {{
        Self({from_native})
    }}
}}
impl{params} From<{ty}> for {native_ty} {{
    fn from(value: {ty}) -> Self {{
        value.into_inner()
    }}
}}
impl{params} IntoValueTuple for {native_ty} {{
    type Tuple = {ty};
    fn into_value_tuple(self) -> Self::Tuple {{
        self.into()
    }}
}}

impl{hash_bounds} HashCode for {ty} {{
    fn hash_code(&self) -> i32 {{
        {hash_code}
    }}
}}
impl{render_bounds} core::fmt::Display for {ty} {{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {{
        render_slots(f, &[{render_slots}])
    }}
}}
impl{render_bounds} Render for {ty} {{
    fn render(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {{
        core::fmt::Display::fmt(self, f)
    }}
}}

impl{any} ITuple for {ty} {{
    fn len(&self) -> usize {{
        {i}
    }}
    fn get(&self, index: usize) -> Result<&dyn Any, TupleError> {{
        match index {{
            {get_arms}_ => Err(TupleError::index_out_of_range(index, {i})),
        }}
    }}
}}
impl{eq_bounds} IEquatable for {ty} {{
    fn equals(&self, other: &dyn Any) -> bool {{
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }}
}}
impl{ord_bounds} IComparable for {ty} {{
    fn compare_to(&self, other: Option<&dyn Any>) -> Result<Ordering, TupleError> {{
        Ok(match operand::<Self>(other)? {{
            Some(other) => Ord::cmp(self, other),
            None => Ordering::Greater,
        }})
    }}
}}
impl{any} IStructuralEquatable for {ty} {{
    fn structural_eq(&self, other: &dyn Any, {comparer}: &dyn IEqualityComparer) -> bool {{
        other
            .downcast_ref::<Self>()
            .is_some_and(|{bound_other}| {structural_eq})
    }}
    fn structural_hash(&self, {comparer}: &dyn IEqualityComparer) -> i32 {{
        {structural_hash}
    }}
}}
impl{any} IStructuralComparable for {ty} {{
    fn structural_cmp(
        &self,
        other: Option<&dyn Any>,
        {comparer}: &dyn IComparer,
    ) -> Result<Ordering, TupleError> {{
        Ok(match operand::<Self>(other)? {{
            Some({bound_other}) => {structural_cmp},
            None => Ordering::Greater,
        }})
    }}
}}

#[cfg(feature = "serde")]
impl{ser_bounds} serde::Serialize for {ty} {{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {{
        serde::Serialize::serialize(&{ser_native}, serializer)
    }}
}}
#[cfg(feature = "serde")]
impl<'de, {de_bounds}> serde::Deserialize<'de> for {ty} {{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {{
        <{native_ty} as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }}
}}
"##,
        fields = join(i, ", ", |j| format!("pub T{j}")),
        args = join(i, ", ", |j| format!("t{j}: T{j}")),
        values = join(i, ", ", |j| format!("t{j}")),
        into_inner = native(i, |j| format!("self.{j}")),
        from_native = join(i, ", ", |j| format!("value.{j}")),
        hash_bounds = generics(i, "HashCode"),
        hash_code = if i == 0 {
            "0".into()
        } else {
            format!("combine([{}])", join(i, ", ", |j| format!("self.{j}.hash_code()")))
        },
        render_bounds = generics(i, "Render"),
        render_slots = join(i, ", ", |j| format!("&self.{j}")),
        get_arms = (0..i).fold(String::new(), |acc, j| acc
            + format!("{j} => Ok(&self.{j}),\n            ").as_str()),
        eq_bounds = generics(i, "Eq + Any"),
        ord_bounds = generics(i, "Ord + Any"),
        structural_eq = if i == 0 {
            "true".into()
        } else {
            join(i, " && ", |j| format!("comparer.equals(&self.{j}, &other.{j})"))
        },
        structural_hash = if i == 0 {
            "0".into()
        } else {
            format!(
                "combine([{}])",
                join(i, ", ", |j| format!("comparer.hash_code(&self.{j})"))
            )
        },
        structural_cmp = if i == 0 {
            "Ordering::Equal".into()
        } else {
            (1..i).fold(
                "comparer.compare(&self.0, &other.0)".to_string(),
                |acc, j| acc + format!(".then_with(|| comparer.compare(&self.{j}, &other.{j}))").as_str(),
            )
        },
        ser_bounds = generics(i, "serde::Serialize"),
        ser_native = native(i, |j| format!("&self.{j}")),
        de_bounds = join(i, ", ", |j| format!("T{j}: serde::Deserialize<'de>")),
    )
}

fn tuples() -> std::io::Result<()> {
    let filename = PathBuf::from(std::env::var_os("OUT_DIR").unwrap()).join("tuples.rs");
    let mut file = BufWriter::new(File::create(filename)?);
    for i in 0..=MAX_ARITY {
        tuple(&mut file, i)?;
    }
    file.flush()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    tuples().unwrap();
}
