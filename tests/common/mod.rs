//! Shared helpers for portal-erd integration tests

#![allow(dead_code)]

use portal_erd::GraphvizEngine;
use std::path::PathBuf;
use std::process::{Command, Output};

/// True when a Graphviz `dot` can be run from PATH
///
/// Tests that need a real engine return early when this is false.
pub fn graphviz_available() -> bool {
    let available = GraphvizEngine::new().is_available();
    if !available {
        eprintln!("skipping: Graphviz `dot` not installed");
    }
    available
}

/// Path of the built CLI binary
pub fn cli_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_portal-erd"))
}

/// Run the CLI with `args`, capturing its output
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(cli_path())
        .args(args)
        .output()
        .expect("failed to run portal-erd")
}
