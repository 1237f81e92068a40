// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Expression evaluation.
//!
//! Reduces an expression to a `Value` in the current scope. Constants are
//! immediate; binary operators evaluate left-to-right and append one
//! instruction to the current block. Evaluation order must be preserved:
//! statement lowering depends on it for block and phi wiring.

use super::Lowerer;
use crate::scope::Binding;
use crate::LowerError;
use skiff_ast::Expr;
use skiff_ir::{Inst, IntPred, Ty, Value};

impl<'f> Lowerer<'f> {
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<Value, LowerError> {
        match expr {
            Expr::Void => Ok(Value::Void),
            Expr::Bool(v) => Ok(Value::Bool(*v)),
            Expr::Int { ty, value } => Ok(Value::Int {
                ty: *ty,
                value: *value,
            }),

            Expr::Var(name) => match self.lookup(name)? {
                Binding::Slot { slot, ty } => self.emit(Inst::Load { ty, slot }),
                Binding::Direct(value) => Ok(value),
            },

            Expr::Add(lhs, rhs) => {
                let l = self.eval_expr(lhs)?;
                let r = self.eval_expr(rhs)?;
                let ty = self.int_operands("add", l, r)?;
                self.emit(Inst::Add { ty, lhs: l, rhs: r })
            }

            Expr::LessThan(lhs, rhs) => {
                let l = self.eval_expr(lhs)?;
                let r = self.eval_expr(rhs)?;
                self.int_operands("less-than", l, r)?;
                self.emit(Inst::Icmp {
                    pred: IntPred::Slt,
                    lhs: l,
                    rhs: r,
                })
            }

            Expr::Equal(lhs, rhs) => {
                let l = self.eval_expr(lhs)?;
                let r = self.eval_expr(rhs)?;
                let lt = self.ty_of(l);
                let rt = self.ty_of(r);
                let comparable =
                    (lt == Ty::Bool && rt == Ty::Bool) || (lt.is_int() && lt == rt);
                if !comparable {
                    return Err(LowerError::TypeMismatch {
                        op: "equal",
                        expected: lt.to_string(),
                        got: rt.to_string(),
                    });
                }
                self.emit(Inst::Icmp {
                    pred: IntPred::Eq,
                    lhs: l,
                    rhs: r,
                })
            }
        }
    }

    /// Both operands must be integers of the same width; returns that type.
    fn int_operands(&self, op: &'static str, l: Value, r: Value) -> Result<Ty, LowerError> {
        let lt = self.ty_of(l);
        let rt = self.ty_of(r);
        if !lt.is_int() {
            return Err(LowerError::TypeMismatch {
                op,
                expected: "integer".to_string(),
                got: lt.to_string(),
            });
        }
        if lt != rt {
            return Err(LowerError::TypeMismatch {
                op,
                expected: lt.to_string(),
                got: rt.to_string(),
            });
        }
        Ok(lt)
    }

    /// Evaluate a switch case label without emitting anything. Only
    /// literal constants qualify; the label type must match the target.
    pub(super) fn const_label(&self, expr: &Expr, expected: Ty) -> Result<i64, LowerError> {
        let (ty, value) = match expr {
            Expr::Bool(v) => (Ty::Bool, *v as i64),
            Expr::Int { ty, value } => (*ty, *value),
            _ => return Err(LowerError::NonConstantCaseLabel),
        };
        if ty != expected {
            return Err(LowerError::TypeMismatch {
                op: "switch case",
                expected: expected.to_string(),
                got: ty.to_string(),
            });
        }
        Ok(value)
    }

    /// Conditions driving branches must be 1-bit booleans.
    pub(super) fn check_cond(&self, op: &'static str, cond: Value) -> Result<(), LowerError> {
        let ty = self.ty_of(cond);
        if ty != Ty::Bool {
            return Err(LowerError::TypeMismatch {
                op,
                expected: Ty::Bool.to_string(),
                got: ty.to_string(),
            });
        }
        Ok(())
    }
}
