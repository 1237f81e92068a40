// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Lowering errors.
//!
//! Every variant is a compiler-input error, not a recoverable runtime
//! condition: lowering aborts on the first failure and never returns a
//! partially built graph.

use skiff_ir::BlockId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// Name not bound anywhere in the scope chain.
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    /// Operand types do not satisfy the operation's contract.
    #[error("type mismatch in {op}: expected {expected}, found {got}")]
    TypeMismatch {
        op: &'static str,
        expected: String,
        got: String,
    },

    /// Switch case labels must be literal constants.
    #[error("switch case label is not a constant expression")]
    NonConstantCaseLabel,

    /// `break` lowered with no enclosing loop.
    #[error("break outside of loop")]
    BreakOutsideLoop,

    /// Attempt to emit into a block that already ends in a terminator.
    #[error("cannot append to {0}: block already has a terminator")]
    AppendAfterTerminator(BlockId),

    /// Post-lowering validation: a reachable block was left unterminated.
    #[error("{0} is reachable but has no terminator")]
    MissingTerminator(BlockId),
}
