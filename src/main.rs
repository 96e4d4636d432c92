//! therapy-summary - AI-generated summaries of therapy session notes
//!
//! Entry point for the therapy-summary service and CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use therapy_summary::cli::{Cli, Commands};
use therapy_summary::config::Settings;

fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets may live in a local .env; variables already set take precedence.
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            therapy_summary::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load();

            let level = match (&settings, cli.verbose) {
                (_, true) => "debug".to_string(),
                (Ok(settings), false) => settings.general.log_level.clone(),
                (Err(_), false) => "info".to_string(),
            };
            init_logging(&level);

            let settings = settings?;

            // Execute command
            match command {
                Commands::Serve { host, port } => {
                    therapy_summary::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Mask { text } => {
                    therapy_summary::cli::commands::mask_text(text)?;
                }
                Commands::Prompt(args) => {
                    therapy_summary::cli::commands::show_prompt(args)?;
                }
                Commands::Config(config_cmd) => {
                    therapy_summary::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
