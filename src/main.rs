use anyhow::Result;
use clap::Parser;

use koe_cli::cli::commands::{configure, panel, providers, run};
use koe_cli::cli::{Args, Command};
use koe_cli::output::{self, OutputConfig};
use koe_cli::pipeline::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Panel {
            to,
            provider,
            model,
            speed,
            glossary,
            offline,
        }) => {
            let options = panel::PanelOptions {
                to,
                provider,
                model,
                speed,
                glossary,
                offline,
            };
            panel::run_panel(options).await?;
        }
        None => {
            let options = run::RunOptions {
                file: args.file,
                to: args.to,
                provider: args.provider,
                model: args.model,
                speed: args.speed,
                glossary: args.glossary,
                offline: args.offline,
                out: args.out,
                play: args.play,
            };
            run::run_once(options).await?;
        }
    }

    Ok(())
}
