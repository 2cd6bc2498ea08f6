use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// folio - portfolio site backend
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site backend relaying contact messages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Report which delivery settings are present
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::CheckConfig => cli::config::check(&config),
    }
}
