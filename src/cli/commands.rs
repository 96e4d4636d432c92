//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;

use crate::cli::args::{ConfigCommand, PromptArgs};
use crate::config::Settings;
use crate::llm::build_summary_messages;
use crate::privacy::PiiMasker;
use crate::summary::Preferences;

/// Run the HTTP service until interrupted
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::run(Arc::new(settings)).await
}

/// Print `text` (or stdin) with PII masked
pub fn mask_text(text: Option<String>) -> Result<()> {
    let text = text_or_stdin(text)?;
    let (masked, report) = PiiMasker::global().mask_with_report(&text);

    tracing::debug!(replacements = report.total(), "Masked input");
    print!("{}", masked);
    if !masked.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Print the prompt messages for the given notes as JSON
pub fn show_prompt(args: PromptArgs) -> Result<()> {
    let notes = text_or_stdin(args.notes)?;
    if notes.trim().is_empty() {
        anyhow::bail!("{}", crate::summary::EMPTY_NOTES_MESSAGE);
    }

    let prefs = Preferences {
        tone: args.tone,
        include_action_items: args.action_items,
        anonymize_data: args.anonymize,
        session_type: args.session_type,
        summary_length: args.summary_length,
    };

    let notes = if prefs.anonymize_data {
        PiiMasker::global().mask(&notes)
    } else {
        notes
    };

    let messages = build_summary_messages(&prefs, &notes);
    println!("{}", serde_json::to_string_pretty(&messages)?);

    Ok(())
}

/// Configuration commands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
