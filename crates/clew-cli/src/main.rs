//! CLI entry point for clew.
//!
//! This module is intentionally thin: it handles argument parsing, output, and exit codes.
//! All business logic lives in the `clew-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clew_app::{
    OutputFormat, check_staged_files, check_with_source, exit_code, render_result,
    validate_policy,
};
use clew_render::render_policy_error;
use clew_repo::FixedPaths;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "clew",
    version,
    about = "Safety guardrails for AI agents and automation in Git repositories"
)]
struct Cli {
    /// Repository root (directory containing .agentpolicy.yaml).
    #[arg(long, default_value = ".", global = true)]
    repo_root: Utf8PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check files against the policy.
    Check {
        /// Check the files staged in git.
        #[arg(long)]
        staged: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Explicit repo-relative paths to check instead of the staged files.
        #[arg(conflicts_with = "staged")]
        paths: Vec<String>,
    },

    /// Load and validate the policy file without checking any paths.
    Validate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Github,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Github => OutputFormat::Github,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());
    tracing::debug!(repo_root = %repo_root, "resolved repository root");

    let result = match &cli.cmd {
        Commands::Check {
            staged,
            format,
            paths,
        } => cmd_check(&repo_root, *staged, (*format).into(), paths),
        Commands::Validate => cmd_validate(&repo_root),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // The top-level message already embeds its cause.
            eprint!("{}", render_policy_error(&err.to_string()));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(
    repo_root: &Utf8Path,
    staged: bool,
    format: OutputFormat,
    paths: &[String],
) -> anyhow::Result<i32> {
    if !repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {}", repo_root);
    }

    let (result, subject) = if staged {
        (check_staged_files(repo_root)?, "staged file")
    } else if !paths.is_empty() {
        let source = FixedPaths(paths.to_vec());
        (check_with_source(repo_root, &source)?, "file")
    } else {
        anyhow::bail!("nothing to check: pass --staged or one or more paths");
    };

    let rendered = render_result(&result, format, subject).context("render check result")?;
    print!("{rendered}");

    Ok(exit_code(&result))
}

fn cmd_validate(repo_root: &Utf8Path) -> anyhow::Result<i32> {
    let summary = validate_policy(repo_root)?;

    println!("✓ Policy is valid: {}", summary.path);
    println!("  deny_paths: {} pattern(s)", summary.deny_patterns);
    println!(
        "  approval_required_paths: {} pattern(s)",
        summary.approval_patterns
    );
    Ok(0)
}
