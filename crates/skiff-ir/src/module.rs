// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Module container - functions plus external declarations.

use crate::{Function, Ty};

/// Declaration of a function provided by the runtime environment.
#[derive(Debug, Clone)]
pub struct ExternDecl {
    pub name: String,
    pub ret_ty: Ty,
    pub params: Vec<Ty>,
    pub variadic: bool,
}

impl ExternDecl {
    pub fn new(name: impl Into<String>, ret_ty: Ty, params: Vec<Ty>) -> Self {
        ExternDecl {
            name: name.into(),
            ret_ty,
            params,
            variadic: false,
        }
    }

    /// `i32 printf(ptr, ...)`
    pub fn printf() -> Self {
        ExternDecl {
            variadic: true,
            ..ExternDecl::new("printf", Ty::I32, vec![Ty::Ptr])
        }
    }

    /// `ptr malloc(i64)`
    pub fn malloc() -> Self {
        ExternDecl::new("malloc", Ty::Ptr, vec![Ty::I64])
    }
}

/// A compilation unit: extern declarations followed by function bodies.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub externs: Vec<ExternDecl>,
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new() -> Self {
        Module::default()
    }

    pub fn declare(&mut self, decl: ExternDecl) {
        self.externs.push(decl);
    }

    pub fn add_function(&mut self, func: Function) {
        self.functions.push(func);
    }
}
