mod geocode;
mod oem;
mod trajectory;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use web::config::ConfigError;
use web::Config;

#[derive(Parser)]
#[command(name = "iss-tracker")]
#[command(about = "ISS ephemeris tracking service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// YAML config file; built-in defaults apply when absent
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Fetch the upstream ephemeris once and print a summary
    Fetch {
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Fetch { config } => fetch(config.as_deref()).await,
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::from_file(p),
        None => Ok(Config::default()),
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn fetch(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match oem::OemClient::new(&config.upstream) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error building client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.fetch().await {
        Ok(dataset) => {
            println!(
                "Fetched {} state vectors from {}",
                dataset.records.len(),
                client.url()
            );
            println!("  object:      {}", dataset.metadata.object_name);
            if let (Some(first), Some(last)) =
                (dataset.records.first(), dataset.records.last())
            {
                println!("  first epoch: {}", first.epoch);
                println!("  last epoch:  {}", last.epoch);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fetch error: {}", e);
            ExitCode::FAILURE
        }
    }
}
