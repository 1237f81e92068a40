// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Structured-control-flow lowering - transform the AST into a block graph.
//!
//! The engine walks statement nodes, allocates basic blocks as control
//! constructs open, and wires them together with explicit terminators.
//! Mutable bindings live in stack slots, loaded on every read and stored
//! on assignment; the `for` loop's induction variable is instead a merge
//! (phi) node at the loop header. Early exit via `break` resolves through
//! dynamically tracked exit targets on the scope stack.

mod error;
mod scope;
mod validate;

pub mod lower;


pub use error::LowerError;
pub use lower::{lower_function, Lowerer};
pub use scope::{Binding, Scope};
pub use validate::validate_terminators;
