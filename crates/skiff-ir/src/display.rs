// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Display implementations - the textual emitter for the block graph.

use crate::{BlockId, ExternDecl, Function, Inst, IntPred, Module, Terminator, Ty, Value};
use std::fmt;

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Void => write!(f, "void"),
            Ty::Bool => write!(f, "bool"),
            Ty::I8 => write!(f, "i8"),
            Ty::I16 => write!(f, "i16"),
            Ty::I32 => write!(f, "i32"),
            Ty::I64 => write!(f, "i64"),
            Ty::Ptr => write!(f, "ptr"),
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bb{}", self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int { value, .. } => write!(f, "{}", value),
            Value::Inst(id) => write!(f, "%{}", id.0),
        }
    }
}

impl fmt::Display for IntPred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntPred::Slt => write!(f, "slt"),
            IntPred::Eq => write!(f, "eq"),
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::Alloca { ty } => write!(f, "alloca {}", ty),
            Inst::Load { ty, slot } => write!(f, "load {} {}", ty, slot),
            Inst::Store { slot, value } => write!(f, "store {}, {}", value, slot),
            Inst::Add { ty, lhs, rhs } => write!(f, "add {} {}, {}", ty, lhs, rhs),
            Inst::Icmp { pred, lhs, rhs } => write!(f, "{} {}, {}", pred, lhs, rhs),
            Inst::Phi { ty, incomings } => {
                write!(f, "phi {} ", ty)?;
                for (i, (block, value)) in incomings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[ {}, {} ]", value, block)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Return { value: Some(v) } => write!(f, "return {}", v),
            Terminator::Return { value: None } => write!(f, "return"),
            Terminator::Goto { target } => write!(f, "goto {}", target),
            Terminator::Branch {
                cond,
                then_block,
                else_block,
            } => write!(f, "if {} then {} else {}", cond, then_block, else_block),
            Terminator::Switch {
                value,
                cases,
                default,
            } => {
                write!(f, "switch {} [ ", value)?;
                for (label, block) in cases {
                    write!(f, "{}: {}, ", label, block)?;
                }
                write!(f, "default: {} ]", default)
            }
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fn {}() -> {} {{", self.name, self.ret_ty)?;
        for block in self.blocks() {
            writeln!(f, "{}:", block.id)?;
            for inst_id in &block.insts {
                writeln!(f, "  %{} = {}", inst_id.0, self.inst(*inst_id))?;
            }
            match &block.terminator {
                Some(term) => writeln!(f, "  {}", term)?,
                None => writeln!(f, "  <no terminator>")?,
            }
        }
        write!(f, "}}")
    }
}

impl fmt::Display for ExternDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extern fn {}(", self.name)?;
        for (i, ty) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        if self.variadic {
            write!(f, ", ...")?;
        }
        write!(f, ") -> {}", self.ret_ty)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.externs {
            writeln!(f, "{}", decl)?;
        }
        if !self.externs.is_empty() && !self.functions.is_empty() {
            writeln!(f)?;
        }
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", func)?;
        }
        Ok(())
    }
}
