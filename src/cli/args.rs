//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// therapy-summary - AI-generated summaries of therapy session notes
#[derive(Parser, Debug)]
#[command(name = "therapy-summary")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mask PII in text and print the result
    Mask {
        /// Text to mask (reads stdin when omitted)
        text: Option<String>,
    },

    /// Print the prompt messages that would be sent for some notes
    Prompt(PromptArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Session notes (reads stdin when omitted)
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Tone of the summary
    #[arg(long, default_value = "Professional")]
    pub tone: String,

    /// Kind of session
    #[arg(long, default_value = "Individual")]
    pub session_type: String,

    /// Requested summary length
    #[arg(long, default_value = "Medium")]
    pub summary_length: String,

    /// Ask for action items
    #[arg(long)]
    pub action_items: bool,

    /// Mask PII in the notes first
    #[arg(long)]
    pub anonymize: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration (secrets redacted)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
