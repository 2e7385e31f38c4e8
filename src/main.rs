//! CLI entry point for kuyk-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::task::LocalSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kuyk-site")]
#[command(author = "Ben Kuyk")]
#[command(version = "0.1.0")]
#[command(about = "Personal site with client-side routing, page transitions and a blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a path once transitions and loads have settled
    #[command(alias = "r")]
    Render {
        /// Path to render
        #[arg(default_value = "/")]
        path: String,

        /// Print a text outline instead of HTML
        #[arg(short, long)]
        text: bool,
    },

    /// Browse the site interactively from the terminal
    #[command(alias = "b")]
    Browse {
        /// Path to start at
        #[arg(default_value = "/")]
        path: String,
    },

    /// List site information
    List {
        /// Type of content to list (posts, routes, tags)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate posts and bodies
    Check,

    /// Display version information
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "kuyk_site=debug,info"
    } else {
        "kuyk_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Render { path, text } => {
            let site = kuyk_site::Site::new(&base_dir)?;
            LocalSet::new()
                .run_until(kuyk_site::commands::render::run(&site, &path, text))
                .await?;
        }

        Commands::Browse { path } => {
            let site = kuyk_site::Site::new(&base_dir)?;
            tracing::info!("Browsing from {}", path);
            LocalSet::new()
                .run_until(kuyk_site::commands::browse::run(&site, &path))
                .await?;
        }

        Commands::List { r#type, json } => {
            let site = kuyk_site::Site::new(&base_dir)?;
            kuyk_site::commands::list::run(&site, &r#type, json)?;
        }

        Commands::Check => {
            let site = kuyk_site::Site::new(&base_dir)?;
            kuyk_site::commands::check::run(&site)?;
        }

        Commands::Version => {
            println!("kuyk-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
