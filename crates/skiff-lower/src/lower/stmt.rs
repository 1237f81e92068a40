// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Statement lowering.

use super::Lowerer;
use crate::scope::Binding;
use crate::LowerError;
use skiff_ast::{Expr, Stmt, SwitchCase};
use skiff_ir::{Inst, Terminator, Value};

impl<'f> Lowerer<'f> {
    pub fn lower_stmt(&mut self, stmt: &Stmt) -> Result<(), LowerError> {
        match stmt {
            Stmt::Block(stmts) => {
                for s in stmts {
                    self.lower_stmt(s)?;
                }
                Ok(())
            }

            Stmt::Define { name, ty, init } => {
                let value = self.eval_expr(init)?;
                let got = self.ty_of(value);
                if got != *ty {
                    return Err(LowerError::TypeMismatch {
                        op: "define",
                        expected: ty.to_string(),
                        got: got.to_string(),
                    });
                }
                let slot = self.emit(Inst::Alloca { ty: *ty })?;
                self.emit(Inst::Store { slot, value })?;
                self.bind(name, Binding::Slot { slot, ty: *ty });
                Ok(())
            }

            Stmt::Assign { name, value } => {
                let v = self.eval_expr(value)?;
                self.assign(name, v)
            }

            Stmt::If {
                cond,
                then_stmt,
                else_stmt,
            } => self.lower_if(cond, then_stmt, else_stmt),

            Stmt::Switch {
                target,
                cases,
                default,
            } => self.lower_switch(target, cases, default),

            Stmt::DoWhile { cond, body } => self.lower_do_while(cond, body),

            Stmt::While { cond, body } => self.lower_while(cond, body),

            Stmt::For {
                init_name,
                init,
                step,
                cond,
                body,
            } => self.lower_for(init_name, init, step, cond, body),

            Stmt::Break => {
                let target = self.break_target().ok_or(LowerError::BreakOutsideLoop)?;
                self.terminate(Terminator::Goto { target })
            }

            Stmt::Return(expr) => {
                let v = self.eval_expr(expr)?;
                let value = match v {
                    Value::Void => None,
                    v => Some(v),
                };
                self.terminate(Terminator::Return { value })
            }
        }
    }

    /// Conditional branch with independent fallthrough-join synthesis for
    /// both sides. A side gets a branch to the join only if its final
    /// block did NOT terminate on its own; the join itself is created
    /// lazily so `if cond { return } else { return }` adds no blocks.
    fn lower_if(
        &mut self,
        cond: &Expr,
        then_stmt: &Stmt,
        else_stmt: &Stmt,
    ) -> Result<(), LowerError> {
        let cond_v = self.eval_expr(cond)?;
        self.check_cond("branch condition", cond_v)?;

        let then_block = self.func.create_block();
        let else_block = self.func.create_block();
        self.terminate(Terminator::Branch {
            cond: cond_v,
            then_block,
            else_block,
        })?;

        self.push_scope(then_block);
        self.lower_stmt(then_stmt)?;
        let then_end = self.pop_scope();
        let then_open = !self.func.has_terminator(then_end);

        self.push_scope(else_block);
        self.lower_stmt(else_stmt)?;
        let else_end = self.pop_scope();
        let else_open = !self.func.has_terminator(else_end);

        if then_open || else_open {
            let join = self.func.create_block();
            if then_open {
                self.func
                    .set_terminator(then_end, Terminator::Goto { target: join });
            }
            if else_open {
                self.func
                    .set_terminator(else_end, Terminator::Goto { target: join });
            }
            self.set_current_block(join);
        }
        Ok(())
    }

    /// Multi-way dispatch. Case labels are compile-time constants; bodies
    /// get no synthetic join, so each must terminate on its own or fail
    /// post-lowering validation.
    fn lower_switch(
        &mut self,
        target: &Expr,
        cases: &[SwitchCase],
        default: &Stmt,
    ) -> Result<(), LowerError> {
        let target_v = self.eval_expr(target)?;
        let target_ty = self.ty_of(target_v);

        let mut table = Vec::with_capacity(cases.len());
        for case in cases {
            let label = self.const_label(&case.label, target_ty)?;
            let block = self.func.create_block();
            self.push_scope(block);
            self.lower_stmt(&case.body)?;
            self.pop_scope();
            table.push((label, block));
        }

        let default_block = self.func.create_block();
        self.push_scope(default_block);
        self.lower_stmt(default)?;
        self.pop_scope();

        self.terminate(Terminator::Switch {
            value: target_v,
            cases: table,
            default: default_block,
        })
    }

    /// Body first, then the condition in the body's final block. The
    /// current block is reused as the body entry when it is still empty.
    fn lower_do_while(&mut self, cond: &Expr, body: &Stmt) -> Result<(), LowerError> {
        let current = self.current_block();
        let body_block = if self.func.block_is_empty(current) && !self.func.has_terminator(current)
        {
            current
        } else {
            let block = self.func.create_block();
            self.terminate(Terminator::Goto { target: block })?;
            block
        };
        let exit_block = self.func.create_block();

        self.push_loop_scope(body_block, exit_block);
        self.lower_stmt(body)?;
        if !self.has_terminator() {
            let cond_v = self.eval_expr(cond)?;
            self.check_cond("loop condition", cond_v)?;
            self.terminate(Terminator::Branch {
                cond: cond_v,
                then_block: body_block,
                else_block: exit_block,
            })?;
        }
        self.pop_scope();

        self.set_current_block(exit_block);
        Ok(())
    }

    fn lower_while(&mut self, cond: &Expr, body: &Stmt) -> Result<(), LowerError> {
        let cond_block = self.func.create_block();
        let body_block = self.func.create_block();
        let exit_block = self.func.create_block();

        self.terminate(Terminator::Goto { target: cond_block })?;

        self.push_scope(cond_block);
        let cond_v = self.eval_expr(cond)?;
        self.check_cond("loop condition", cond_v)?;
        self.terminate(Terminator::Branch {
            cond: cond_v,
            then_block: body_block,
            else_block: exit_block,
        })?;
        self.pop_scope();

        self.push_loop_scope(body_block, exit_block);
        self.lower_stmt(body)?;
        if !self.has_terminator() {
            self.terminate(Terminator::Goto { target: cond_block })?;
        }
        self.pop_scope();

        self.set_current_block(exit_block);
        Ok(())
    }

    /// The one place loop-carried state is a merge node instead of a
    /// stack slot. The phi's first operand is the init value from the
    /// pre-header edge; the step result becomes the back-edge operand,
    /// recorded from whichever block ends up holding the latch branch.
    /// The induction variable observes the phi during step evaluation and
    /// the post-step value everywhere after.
    fn lower_for(
        &mut self,
        init_name: &str,
        init: &Expr,
        step: &Expr,
        cond: &Expr,
        body: &Stmt,
    ) -> Result<(), LowerError> {
        let init_v = self.eval_expr(init)?;
        let init_ty = self.ty_of(init_v);
        let pre_header = self.current_block();

        let loop_block = self.func.create_block();
        self.terminate(Terminator::Goto { target: loop_block })?;
        let exit_block = self.func.create_block();

        self.push_loop_scope(loop_block, exit_block);
        let phi = self.func.push_inst(
            loop_block,
            Inst::Phi {
                ty: init_ty,
                incomings: vec![(pre_header, init_v)],
            },
        );
        self.bind(init_name, Binding::Direct(Value::Inst(phi)));
        let step_v = self.eval_expr(step)?;
        self.bind(init_name, Binding::Direct(step_v));

        self.lower_stmt(body)?;
        if !self.has_terminator() {
            let cond_v = self.eval_expr(cond)?;
            self.check_cond("loop condition", cond_v)?;
            // The back edge comes from wherever the body left off, not
            // necessarily the header.
            let latch = self.current_block();
            self.func.add_incoming(phi, latch, step_v);
            self.terminate(Terminator::Branch {
                cond: cond_v,
                then_block: loop_block,
                else_block: exit_block,
            })?;
        }
        self.pop_scope();

        self.set_current_block(exit_block);
        Ok(())
    }
}
