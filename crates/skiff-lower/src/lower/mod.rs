// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The lowering engine and its scope-stack plumbing.

mod expr;
mod stmt;

use crate::scope::{Binding, Scope};
use crate::{validate_terminators, LowerError};
use skiff_ast::Stmt;
use skiff_ir::{BlockId, Function, Inst, Terminator, Ty, Value};

/// Lowers one function body. Exclusively owns the block graph for the
/// duration of the pass; independent functions can be lowered concurrently
/// because nothing is shared.
pub struct Lowerer<'f> {
    func: &'f mut Function,
    /// Scope frames, innermost last. Never empty: the root frame sits on
    /// the entry block.
    scopes: Vec<Scope>,
}

impl<'f> Lowerer<'f> {
    pub fn new(func: &'f mut Function) -> Self {
        let entry = func.entry_block();
        Lowerer {
            func,
            scopes: vec![Scope::new_root(entry)],
        }
    }

    /// Validate the finished graph: every block reachable from the entry
    /// must end in exactly one terminator.
    pub fn finish(self) -> Result<(), LowerError> {
        validate_terminators(self.func)
    }

    // ── Scope stack ─────────────────────────────────────────────

    fn top(&self) -> &Scope {
        let last = self.scopes.len() - 1;
        &self.scopes[last]
    }

    fn top_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Block instructions are currently appended to.
    pub fn current_block(&self) -> BlockId {
        self.top().block
    }

    pub(crate) fn set_current_block(&mut self, block: BlockId) {
        self.top_mut().block = block;
    }

    /// Child scope on a fresh block; break target deferred to outer frames.
    pub(crate) fn push_scope(&mut self, block: BlockId) {
        self.scopes.push(Scope::child(block, None));
    }

    /// Child scope for a loop body: `break` inside it resolves to `exit`.
    pub(crate) fn push_loop_scope(&mut self, block: BlockId, exit: BlockId) {
        self.scopes.push(Scope::child(block, Some(exit)));
    }

    /// Discard the innermost frame, returning the block it ended on.
    pub(crate) fn pop_scope(&mut self) -> BlockId {
        match self.scopes.pop() {
            Some(scope) => scope.block,
            None => unreachable!("scope stack underflow"),
        }
    }

    /// Bind in the innermost frame, shadowing outer bindings.
    pub(crate) fn bind(&mut self, name: &str, binding: Binding) {
        self.top_mut().bind(name, binding);
    }

    /// Resolve a name through the scope chain, innermost first.
    pub(crate) fn lookup(&self, name: &str) -> Result<Binding, LowerError> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| LowerError::UndefinedVariable(name.to_string()))
    }

    /// Store through the binding's slot, so the update is observed by
    /// every later read regardless of which block performs it. Induction
    /// variables are plain values; reassigning one just moves the binding
    /// in its owning frame.
    pub(crate) fn assign(&mut self, name: &str, value: Value) -> Result<(), LowerError> {
        match self.lookup(name)? {
            Binding::Slot { slot, ty } => {
                let got = self.ty_of(value);
                if got != ty {
                    return Err(LowerError::TypeMismatch {
                        op: "assign",
                        expected: ty.to_string(),
                        got: got.to_string(),
                    });
                }
                self.emit(Inst::Store { slot, value })?;
                Ok(())
            }
            Binding::Direct(_) => {
                for scope in self.scopes.iter_mut().rev() {
                    if scope.rebind(name, Binding::Direct(value)) {
                        return Ok(());
                    }
                }
                Err(LowerError::UndefinedVariable(name.to_string()))
            }
        }
    }

    /// Exit block of the nearest enclosing loop, if any.
    pub(crate) fn break_target(&self) -> Option<BlockId> {
        self.scopes.iter().rev().find_map(|scope| scope.break_target)
    }

    /// True if the current insertion block already ends in a terminator.
    /// This is the check guarding every synthetic fallthrough branch.
    pub fn has_terminator(&self) -> bool {
        self.func.has_terminator(self.current_block())
    }

    // ── Emission ────────────────────────────────────────────────

    pub(crate) fn emit(&mut self, inst: Inst) -> Result<Value, LowerError> {
        let block = self.current_block();
        if self.func.has_terminator(block) {
            return Err(LowerError::AppendAfterTerminator(block));
        }
        Ok(Value::Inst(self.func.push_inst(block, inst)))
    }

    pub(crate) fn terminate(&mut self, term: Terminator) -> Result<(), LowerError> {
        let block = self.current_block();
        if self.func.has_terminator(block) {
            return Err(LowerError::AppendAfterTerminator(block));
        }
        self.func.set_terminator(block, term);
        Ok(())
    }

    pub(crate) fn ty_of(&self, value: Value) -> Ty {
        self.func.value_ty(value)
    }
}

/// Lower a complete function body. Fell-through void functions get an
/// implicit `return`; anything else left unterminated fails validation.
pub fn lower_function(
    name: impl Into<String>,
    ret_ty: Ty,
    body: &Stmt,
) -> Result<Function, LowerError> {
    let mut func = Function::new(name, ret_ty);
    let mut lowerer = Lowerer::new(&mut func);
    lowerer.lower_stmt(body)?;
    if !lowerer.has_terminator() && ret_ty == Ty::Void {
        lowerer.terminate(Terminator::Return { value: None })?;
    }
    lowerer.finish()?;
    Ok(func)
}
