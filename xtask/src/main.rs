//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Run the curve generation benchmarks.
    Bench,
}

/// Locate the repository root from `CARGO_MANIFEST_DIR`.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = repo_root()?;

    match cli.command {
        CommandName::Tidy => tidy(&root),
        CommandName::Test => test(&root),
        CommandName::Bench => bench(&root),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(root: &Path) -> Result<()> {
    format_workspace(root)?;
    lint_workspace(root)?;
    format_workspace(root)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Run the criterion benchmarks of the core crate.
fn bench(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;
    cmd!(sh, "cargo bench --package hilbert").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;

    let config = root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(root: &Path) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(root);
    Ok(sh)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn cargo_alias_and_lint_thresholds_exist() -> Result<()> {
        let root = repo_root()?;
        let config = fs::read_to_string(root.join(".cargo").join("config.toml"))?;
        assert!(config.contains("xtask = \"run --package xtask --\""));
        let clippy = fs::read_to_string(root.join("clippy.toml"))?;
        for key in [
            "cognitive-complexity-threshold",
            "excessive-nesting-threshold",
            "too-many-lines-threshold",
        ] {
            assert!(clippy.contains(key), "clippy.toml lacks {key}");
        }
        Ok(())
    }
}
