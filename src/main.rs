//! Goalboard CLI
//!
//! - `serve`: run the HTTP server
//! - `render`: render the board once to a file or stdout
//! - `config`: print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use goalboard::api::{serve, AppState};
use goalboard::board::Board;
use goalboard::config::{generate_default_config, Config, LoggingConfig};

#[derive(Parser)]
#[command(name = "goalboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render a goal grid and progress timeline from CSV files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/goalboard/config.toml or ./goalboard.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding goals.csv, updates.csv and assets/
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Fetch the CSV files from this URL instead of the root directory
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the board page once
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Wrote default config to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(root) = cli.root {
        config.source.root_dir = root;
    }
    if let Some(base_url) = cli.base_url {
        config.source.base_url = Some(base_url);
    }

    init_logging(&config.logging);

    let board = Arc::new(Board::from_config(&config)?);

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting Goalboard server v{}", env!("CARGO_PKG_VERSION"));
            serve(AppState::from_config(board, &config)).await?;
        }

        Commands::Render { output } => {
            let (doc, report) = board.render_page().await;

            if !report.is_complete() {
                tracing::warn!(
                    goals = report.goals.is_rendered(),
                    timeline = report.timeline.is_rendered(),
                    "Board rendered with missing sections"
                );
            }

            let html = doc.to_html();
            match output {
                Some(path) => {
                    tokio::fs::write(&path, html)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        goals = report.goals.count(),
                        events = report.timeline.count(),
                        "Board written"
                    );
                }
                None => print!("{}", html),
            }
        }

        // Handled before config loading
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Initialize tracing; logs go to stderr so `render` output stays clean
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("goalboard={},tower_http=info", logging.level))
    });

    let json = logging.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
