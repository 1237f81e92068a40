// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! IR instructions and terminators.

use crate::{BlockId, Ty, Value};

/// Integer comparison predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntPred {
    /// Signed less-than.
    Slt,
    /// Equality.
    Eq,
}

/// A non-terminating instruction. Every instruction has an arena slot
/// and a result type; a `Store` result is `Void` and never referenced.
#[derive(Debug, Clone, PartialEq)]
pub enum Inst {
    /// Stack slot backing one mutable binding. The result is the slot
    /// address.
    Alloca {
        ty: Ty,
    },
    /// Read the current value of a slot.
    Load {
        ty: Ty,
        slot: Value,
    },
    /// Write a value into a slot.
    Store {
        slot: Value,
        value: Value,
    },
    Add {
        ty: Ty,
        lhs: Value,
        rhs: Value,
    },
    Icmp {
        pred: IntPred,
        lhs: Value,
        rhs: Value,
    },
    /// Merge node: value depends on which incoming edge was taken.
    Phi {
        ty: Ty,
        incomings: Vec<(BlockId, Value)>,
    },
}

impl Inst {
    /// Result type of this instruction.
    pub fn ty(&self) -> Ty {
        match self {
            Inst::Alloca { .. } => Ty::Ptr,
            Inst::Load { ty, .. } => *ty,
            Inst::Store { .. } => Ty::Void,
            Inst::Add { ty, .. } => *ty,
            Inst::Icmp { .. } => Ty::Bool,
            Inst::Phi { ty, .. } => *ty,
        }
    }
}

/// The single control-transferring instruction that ends a basic block.
#[derive(Debug, Clone, PartialEq)]
pub enum Terminator {
    Return {
        value: Option<Value>,
    },
    Goto {
        target: BlockId,
    },
    Branch {
        cond: Value,
        then_block: BlockId,
        else_block: BlockId,
    },
    Switch {
        value: Value,
        cases: Vec<(i64, BlockId)>,
        default: BlockId,
    },
}

impl Terminator {
    /// Blocks this terminator can transfer control to.
    pub fn successors(&self) -> Vec<BlockId> {
        match self {
            Terminator::Return { .. } => Vec::new(),
            Terminator::Goto { target } => vec![*target],
            Terminator::Branch {
                then_block,
                else_block,
                ..
            } => vec![*then_block, *else_block],
            Terminator::Switch { cases, default, .. } => {
                let mut succs: Vec<BlockId> = cases.iter().map(|(_, b)| *b).collect();
                succs.push(*default);
                succs
            }
        }
    }
}
