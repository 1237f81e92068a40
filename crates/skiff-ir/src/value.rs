// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! IR values - constants and instruction results.

use crate::{InstId, Ty};

/// A value usable as an instruction or terminator operand.
///
/// Constants carry their type; instruction results are typed through the
/// owning function's arena (see `Function::value_ty`). `Void` is the
/// sentinel "no value", valid only where a void result is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Void,
    Bool(bool),
    Int { ty: Ty, value: i64 },
    Inst(InstId),
}

impl Value {
    pub fn i8(value: i64) -> Value {
        Value::Int { ty: Ty::I8, value }
    }

    pub fn i16(value: i64) -> Value {
        Value::Int { ty: Ty::I16, value }
    }

    pub fn i32(value: i64) -> Value {
        Value::Int { ty: Ty::I32, value }
    }

    pub fn i64(value: i64) -> Value {
        Value::Int { ty: Ty::I64, value }
    }
}
