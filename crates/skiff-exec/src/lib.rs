// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Run an emitted module through an external interpreter binary.
//!
//! The core never depends on how a graph is executed; this crate is the
//! collaborator that renders a module to a scratch file, hands it to an
//! interpreter process, and captures whatever it prints.

use skiff_ir::Module;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};
use std::{env, fs};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The interpreter ran but exited non-zero.
    #[error("interpreter exited with {status}: {stderr}")]
    Interpreter {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

static NEXT_FILE_ID: AtomicU32 = AtomicU32::new(0);

fn scratch_path() -> PathBuf {
    let id = NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("skiff-{}-{}.sir", std::process::id(), id))
}

/// Render `module` to a scratch file, run `interpreter <file>`, and
/// return the captured stdout. The scratch file is removed whether the
/// run succeeds or not.
pub fn run_module(module: &Module, interpreter: &str) -> Result<String, ExecError> {
    let path = scratch_path();
    fs::write(&path, module.to_string())?;
    let output = Command::new(interpreter).arg(&path).output();
    let _ = fs::remove_file(&path);
    let output = output?;

    if !output.status.success() {
        return Err(ExecError::Interpreter {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
