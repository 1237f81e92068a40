// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Abstract syntax tree consumed by lowering.
//!
//! Nodes are constructed once by the caller and are read-only during
//! lowering. The tree references the IR type model directly; there is no
//! separate surface-type layer.

use skiff_ir::Ty;

/// An expression. Binary operands must agree in type; mismatches are
/// rejected at lowering time.
#[derive(Debug, Clone)]
pub enum Expr {
    Void,
    Bool(bool),
    Int { ty: Ty, value: i64 },
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    LessThan(Box<Expr>, Box<Expr>),
    Equal(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn i8(value: i64) -> Expr {
        Expr::Int { ty: Ty::I8, value }
    }

    pub fn i16(value: i64) -> Expr {
        Expr::Int { ty: Ty::I16, value }
    }

    pub fn i32(value: i64) -> Expr {
        Expr::Int { ty: Ty::I32, value }
    }

    pub fn i64(value: i64) -> Expr {
        Expr::Int { ty: Ty::I64, value }
    }

    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn less_than(lhs: Expr, rhs: Expr) -> Expr {
        Expr::LessThan(Box::new(lhs), Box::new(rhs))
    }

    pub fn equal(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Equal(Box::new(lhs), Box::new(rhs))
    }
}

/// A statement. `Block` sequences statements; an empty `Block` stands in
/// for a missing else branch.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Define {
        name: String,
        ty: Ty,
        init: Expr,
    },
    Assign {
        name: String,
        value: Expr,
    },
    If {
        cond: Expr,
        then_stmt: Box<Stmt>,
        else_stmt: Box<Stmt>,
    },
    Switch {
        target: Expr,
        cases: Vec<SwitchCase>,
        default: Box<Stmt>,
    },
    DoWhile {
        cond: Expr,
        body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    For {
        init_name: String,
        init: Expr,
        step: Expr,
        cond: Expr,
        body: Box<Stmt>,
    },
    Break,
    Return(Expr),
}

/// One arm of a switch. The label must be a literal constant.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub label: Expr,
    pub body: Stmt,
}

impl Stmt {
    /// Empty statement, useful as a no-op else branch.
    pub fn empty() -> Stmt {
        Stmt::Block(Vec::new())
    }

    pub fn define(name: impl Into<String>, ty: Ty, init: Expr) -> Stmt {
        Stmt::Define {
            name: name.into(),
            ty,
            init,
        }
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Stmt {
        Stmt::Assign {
            name: name.into(),
            value,
        }
    }

    pub fn if_else(cond: Expr, then_stmt: Stmt, else_stmt: Stmt) -> Stmt {
        Stmt::If {
            cond,
            then_stmt: Box::new(then_stmt),
            else_stmt: Box::new(else_stmt),
        }
    }

    pub fn ret(value: Expr) -> Stmt {
        Stmt::Return(value)
    }
}
