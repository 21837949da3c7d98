mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ignore_fetch_github::{Getter, GetterConfig};

#[derive(Parser)]
#[command(name = "ignore-fetch", version)]
#[command(about = "Fetch and combine gitignore pattern files from a central repository")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve pattern files, combine them, and write them out
    Get {
        /// Names of pattern files to retrieve
        #[arg(value_name = "NAME")]
        names: Vec<String>,
        /// Path to a file containing names of pattern files, one per line
        #[arg(long, short = 'n')]
        names_file: Option<PathBuf>,
        /// Path to the output file (default: STDOUT)
        #[arg(long, short = 'o')]
        output_file: Option<PathBuf>,
        /// Maximum number of concurrent requests (default: available
        /// processing units minus one)
        #[arg(long, short = 'm')]
        max_requests: Option<usize>,
        #[command(flatten)]
        repo: RepoArgs,
    },
    /// Print a list of the available pattern files
    List {
        #[command(flatten)]
        repo: RepoArgs,
    },
}

/// Flags shared by every subcommand that talks to the repository.
#[derive(Args)]
struct RepoArgs {
    /// Base URL for a GitHub REST API v3 compatible server
    #[arg(long, short = 'u')]
    base_url: Option<String>,
    /// Owner or organization of the patterns repository (default: github)
    #[arg(long, short = 'w')]
    owner: Option<String>,
    /// Name of the patterns repository (default: gitignore)
    #[arg(long, short = 'r')]
    repository: Option<String>,
    /// Branch or commit to inspect (default: master)
    #[arg(long, short = 'b')]
    branch: Option<String>,
    /// Suffix identifying ignore files (default: .gitignore)
    #[arg(long, short = 's')]
    suffix: Option<String>,
}

/// Builds the getter configuration: built-in defaults, overridden by the
/// config file, overridden by flags.
fn getter_config(
    repo: &RepoArgs,
    defaults: &config::Defaults,
    max_requests: Option<usize>,
) -> GetterConfig {
    let mut config = GetterConfig::default();
    defaults.apply(&mut config);

    if let Some(base_url) = &repo.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(owner) = &repo.owner {
        config.owner = owner.clone();
    }
    if let Some(repository) = &repo.repository {
        config.repository = repository.clone();
    }
    if let Some(branch) = &repo.branch {
        config.branch = branch.clone();
    }
    if let Some(suffix) = &repo.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(max_requests) = max_requests {
        config.max_requests = max_requests;
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = config::load_config();

    match cli.command {
        Command::Get {
            names,
            names_file,
            output_file,
            max_requests,
            repo,
        } => {
            let getter = Getter::new(getter_config(&repo, &app_config.defaults, max_requests));
            commands::get::run(
                &getter,
                names,
                names_file.as_deref(),
                output_file.as_deref(),
            )
            .await
        }
        Command::List { repo } => {
            let getter = Getter::new(getter_config(&repo, &app_config.defaults, None));
            commands::list::run(&getter).await
        }
    }
}
