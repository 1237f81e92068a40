// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Post-lowering validation.

use crate::LowerError;
use skiff_ir::Function;

/// Every block reachable from the entry must end in exactly one
/// terminator. Unreachable blocks (e.g. the unused exit of a loop whose
/// body always returns) are exempt.
pub fn validate_terminators(func: &Function) -> Result<(), LowerError> {
    let mut visited = vec![false; func.blocks().len()];
    let mut work = vec![func.entry_block()];
    while let Some(block) = work.pop() {
        let idx = block.0 as usize;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        match &func.block(block).terminator {
            Some(term) => work.extend(term.successors()),
            None => return Err(LowerError::MissingTerminator(block)),
        }
    }
    Ok(())
}
