//! CLI entry point for portfolio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_rs::commands::generate::GenerateOptions;
use portfolio_rs::Portfolio;

#[derive(Parser)]
#[command(name = "portfolio-rs")]
#[command(version)]
#[command(about = "A single-page portfolio site generator and content API", long_about = None)]
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
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Resolve content and generate the page
    #[command(alias = "g")]
    Generate {
        /// Fetch content from the content service instead of the content file
        #[arg(short, long)]
        remote: bool,

        /// Content service base URL (overrides the configured environment variable)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Fetch content from the content service and print it
    Fetch {
        /// Content service base URL (overrides the configured environment variable)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Start the content API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,

        /// Reload content when source files change
        #[arg(short, long)]
        watch: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portfolio_rs=debug,info"
    } else {
        "portfolio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            portfolio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::Generate { remote, api_base } => {
            let site = Portfolio::new(&base_dir)?;
            tracing::info!("Generating page...");
            site.generate(&GenerateOptions { remote, api_base }).await?;
            println!("Generated successfully!");
        }

        Commands::Fetch { api_base } => {
            let site = Portfolio::new(&base_dir)?;
            portfolio_rs::commands::fetch::run(&site, api_base).await?;
        }

        Commands::Server { port, ip, watch } => {
            let site = Portfolio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            portfolio_rs::server::start(&site, &ip, port, watch).await?;
        }

        Commands::Clean => {
            let site = Portfolio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("portfolio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
