#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use pokedex::{CatalogStore, FileStorage};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn pokedex_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pokedex"))
}

/// `pokedex` invocation pinned to `data_dir`, isolated from the caller's env.
pub fn pokedex(data_dir: &Path) -> Command {
    let mut cmd = Command::new(pokedex_binary());
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("POKEDEX_DATA_DIR")
        .env_remove("POKEDEX_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to exit non-zero.
pub fn run_command_expect_failure(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(output)
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).with_context(|| {
        format!(
            "stdout is not JSON: {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Fresh data directory plus a store opened over it.
pub fn scratch_store() -> (TempDir, CatalogStore<FileStorage>) {
    let dir = TempDir::new().expect("allocate scratch data dir");
    let store = pokedex::open_file_store(dir.path()).expect("open scratch store");
    (dir, store)
}

pub fn reopen(dir: &TempDir) -> CatalogStore<FileStorage> {
    pokedex::open_file_store(dir.path()).expect("reopen scratch store")
}
