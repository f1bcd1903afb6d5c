use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "koe")]
#[command(about = "Translate, summarize, and voice product descriptions")]
#[command(version)]
pub struct Args {
    /// File with the product description (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language code (ja or ko)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Chat model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Speech speed (0.25-4.0)
    #[arg(short = 's', long)]
    pub speed: Option<f32>,

    /// Glossary TOML file overriding the bundled glossary
    #[arg(short = 'g', long)]
    pub glossary: Option<String>,

    /// Use the deterministic fixture provider instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Write the synthesized audio to this file
    #[arg(short = 'o', long)]
    pub out: Option<String>,

    /// Play the synthesized audio
    #[arg(long)]
    pub play: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure koe settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported target languages
    Languages,
    /// List configured providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
    /// Interactive panel mode
    Panel {
        /// Target language code (ja or ko)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Provider name
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Chat model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Speech speed (0.25-4.0)
        #[arg(short = 's', long)]
        speed: Option<f32>,

        /// Glossary TOML file overriding the bundled glossary
        #[arg(short = 'g', long)]
        glossary: Option<String>,

        /// Use the deterministic fixture provider instead of the network
        #[arg(long)]
        offline: bool,
    },
}
