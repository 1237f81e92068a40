// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Function container - ordered block list plus an instruction arena.

use crate::{Inst, Terminator, Ty, Value};

/// A function under construction: the block graph the lowering engine
/// mutates. Instructions live in a per-function arena; blocks reference
/// them by id so phi operands can be amended after the fact.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub ret_ty: Ty,
    blocks: Vec<Block>,
    insts: Vec<Inst>,
    entry_block: BlockId,
}

/// Basic block: instructions in emission order, at most one terminator.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub insts: Vec<InstId>,
    pub terminator: Option<Terminator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstId(pub u32);

impl Function {
    /// Create a function with an empty entry block `bb0`.
    pub fn new(name: impl Into<String>, ret_ty: Ty) -> Self {
        let entry_block = BlockId(0);
        Function {
            name: name.into(),
            ret_ty,
            blocks: vec![Block {
                id: entry_block,
                insts: Vec::new(),
                terminator: None,
            }],
            insts: Vec::new(),
            entry_block,
        }
    }

    pub fn entry_block(&self) -> BlockId {
        self.entry_block
    }

    /// Allocate a new empty block and append it to the block list.
    pub fn create_block(&mut self) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(Block {
            id,
            insts: Vec::new(),
            terminator: None,
        });
        id
    }

    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.0 as usize]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn inst(&self, id: InstId) -> &Inst {
        &self.insts[id.0 as usize]
    }

    /// Append an instruction to a block and return its id.
    pub fn push_inst(&mut self, block: BlockId, inst: Inst) -> InstId {
        let id = InstId(self.insts.len() as u32);
        self.insts.push(inst);
        self.blocks[block.0 as usize].insts.push(id);
        id
    }

    pub fn set_terminator(&mut self, block: BlockId, term: Terminator) {
        self.blocks[block.0 as usize].terminator = Some(term);
    }

    pub fn has_terminator(&self, block: BlockId) -> bool {
        self.blocks[block.0 as usize].terminator.is_some()
    }

    /// True if the block has no instructions yet.
    pub fn block_is_empty(&self, block: BlockId) -> bool {
        self.blocks[block.0 as usize].insts.is_empty()
    }

    /// Register an extra incoming edge on a phi instruction.
    pub fn add_incoming(&mut self, phi: InstId, pred: BlockId, value: Value) {
        match &mut self.insts[phi.0 as usize] {
            Inst::Phi { incomings, .. } => incomings.push((pred, value)),
            other => panic!("add_incoming on non-phi instruction {:?}", other),
        }
    }

    /// Type of any value: constants carry it, instruction results come
    /// from the arena.
    pub fn value_ty(&self, value: Value) -> Ty {
        match value {
            Value::Void => Ty::Void,
            Value::Bool(_) => Ty::Bool,
            Value::Int { ty, .. } => ty,
            Value::Inst(id) => self.insts[id.0 as usize].ty(),
        }
    }
}
