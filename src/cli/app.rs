//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use dco::output::OutputMode;

/// dco - Developer Certificate of Origin sign-off checker
#[derive(Parser, Debug)]
#[command(
    name = "dco",
    version,
    about = "Developer Certificate of Origin sign-off checker",
    long_about = "Check that every commit of a pull request is signed off by its author.\n\n\
                  Commits need a 'Signed-off-by: Name <email>' trailer matching their\n\
                  author or committer, or a later remediation commit vouching for them."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check commits for sign-offs (exits 1 on violations)
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the commit status a hosting platform would show
    Status {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print a remediation commit message for the given commits
    Remediate {
        /// Commits to sign off retroactively
        #[arg(required = true)]
        shas: Vec<String>,

        /// Who signs off, as "Name <email>" (defaults to git user.name/user.email)
        #[arg(long)]
        signer: Option<String>,

        /// Original author, as "Name <email>", for third-party remediation
        #[arg(long = "on-behalf-of")]
        on_behalf_of: Option<String>,
    },

    /// Show version
    Version,
}

/// Where the commits come from and how they are evaluated
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Revision range in the local repository (e.g. origin/main..HEAD)
    #[arg(long, conflicts_with = "commits")]
    pub range: Option<String>,

    /// JSON file with the pull request's commits, as returned by the platform
    #[arg(long)]
    pub commits: Option<PathBuf>,

    /// Pull request URL used to link violating commits
    #[arg(long = "pr-url")]
    pub pr_url: Option<String>,

    /// Configuration file (defaults to the nearest .dco.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { input }) => commands::check(&input, output_mode),
        Some(Command::Status { input }) => commands::status(&input, output_mode),
        Some(Command::Remediate {
            shas,
            signer,
            on_behalf_of,
        }) => commands::remediate(&shas, signer.as_deref(), on_behalf_of.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": dco::VERSION
                    })
                );
            } else {
                println!("dco v{}", dco::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": dco::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("dco v{}", dco::VERSION);
                println!("\nRun 'dco --help' for usage");
                println!("Run 'dco check --range origin/main..HEAD' to check a branch");
            }
            Ok(())
        },
    }
}
