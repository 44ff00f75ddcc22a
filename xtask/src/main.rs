use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for nebula")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, and tests
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build the entire workspace
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run("fmt", &["fmt", "--all", "--", "--check"])?;
            run("clippy", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
            run("test", &["test", "--workspace"])?;
        }
        Commands::Fmt => run("fmt", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run(
            "clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        )?,
        Commands::Test => run("test", &["test", "--workspace"])?,
        Commands::Build => run("build", &["build", "--workspace"])?,
    }

    Ok(())
}

fn run(name: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {name}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {name} failed");
    }
    Ok(())
}
