// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Lexical scope frames.
//!
//! A frame binds names introduced by one construct and records the block
//! instructions are currently appended to. The `Lowerer` keeps frames on a
//! stack (innermost last); a frame never outlives the statement subtree it
//! was created for. Lookup and assignment walk the stack from the top.

use indexmap::IndexMap;
use skiff_ir::{BlockId, Ty, Value};

/// How a name resolves. Mutable bindings live in stack slots and are
/// loaded on every read, so updates from one block are observed by
/// every block that executes later. Loop induction variables are bound
/// directly to the value they carry (the merge node, then the stepped
/// value).
#[derive(Debug, Clone, Copy)]
pub enum Binding {
    Slot { slot: Value, ty: Ty },
    Direct(Value),
}

#[derive(Debug)]
pub struct Scope {
    /// Block instructions are currently appended to. Constructs that
    /// synthesize a join move this forward so later statements land there.
    pub block: BlockId,
    /// The block `break` branches to, if this frame opened a loop body.
    pub break_target: Option<BlockId>,
    vars: IndexMap<String, Binding>,
}

impl Scope {
    /// Root frame: no parent, no break target.
    pub fn new_root(block: BlockId) -> Scope {
        Scope {
            block,
            break_target: None,
            vars: IndexMap::new(),
        }
    }

    /// Child frame on a given block. A `None` break target defers to the
    /// enclosing frames, so `break` inside an `if` still finds its loop;
    /// loop bodies pass the loop's exit block to override it.
    pub fn child(block: BlockId, break_target: Option<BlockId>) -> Scope {
        Scope {
            block,
            break_target,
            vars: IndexMap::new(),
        }
    }

    /// Bind a name in this frame, shadowing any outer binding.
    pub fn bind(&mut self, name: impl Into<String>, binding: Binding) {
        self.vars.insert(name.into(), binding);
    }

    pub fn get(&self, name: &str) -> Option<Binding> {
        self.vars.get(name).copied()
    }

    /// Overwrite an existing binding owned by this frame. Returns false if
    /// the name is not bound here.
    pub fn rebind(&mut self, name: &str, binding: Binding) -> bool {
        match self.vars.get_mut(name) {
            Some(entry) => {
                *entry = binding;
                true
            }
            None => false,
        }
    }
}
