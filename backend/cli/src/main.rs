mod predict_cmd;
mod serve_cmd;
mod status_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::instrument::WithSubscriber;

use motorspeed_logging::{bootstrap_dispatch, init_logger, LoggerOptions};

#[derive(Parser)]
#[command(name = "motorspeed")]
#[command(about = "Electric motor speed predictor")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web application
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Predict once from the command line, without starting the server
    Predict(predict_cmd::PredictArgs),
    /// Query a running server's health endpoint
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // No global subscriber yet; config warnings go to a bootstrap one.
    let config = motorspeed_config::load_and_prepare(cli.config.as_deref())
        .with_subscriber(bootstrap_dispatch())
        .await?;

    init_logger(LoggerOptions {
        level: config.log_level(),
        log_dir: config.log_dir(),
        json_console: config.log_json(),
    })?;

    match cli.command {
        Commands::Serve { port, bind } => serve_cmd::run(config, port, bind).await,
        Commands::Predict(args) => predict_cmd::run(&config, &args).await,
        Commands::Status => status_cmd::run(&config).await,
    }
}
