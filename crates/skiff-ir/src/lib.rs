// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Skiff IR - a control-flow graph of basic blocks with explicit terminators.
//!
//! This crate is the container side of lowering: functions own an ordered
//! list of basic blocks, each block holds instructions and at most one
//! terminator. The lowering engine mutates the graph; rendering and
//! execution are handled by collaborators and never leak back in here.

mod display;
mod function;
mod inst;
mod module;
mod types;
mod value;


pub use function::{Block, BlockId, Function, InstId};
pub use inst::{Inst, IntPred, Terminator};
pub use module::{ExternDecl, Module};
pub use types::Ty;
pub use value::Value;
