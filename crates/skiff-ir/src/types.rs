// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! IR type model - a closed set of primitive scalar types.

/// Primitive scalar type. `Ptr` is the type of stack-slot addresses and
/// extern pointer parameters (`printf`, `malloc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    Void,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Ptr,
}

impl Ty {
    /// True for the fixed-width integer types.
    pub fn is_int(&self) -> bool {
        matches!(self, Ty::I8 | Ty::I16 | Ty::I32 | Ty::I64)
    }
}
