//! Interactive panel mode: a REPL that runs the pipeline per input block.

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::{ComposeOptions, Composition, compose};
use crate::panel::{Input, Panel, PanelCommand, PanelCommandCompleter, parse_input};
use crate::pipeline::Language;
use crate::ui::{Spinner, Style};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct PanelOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f32>,
    pub glossary: Option<String>,
    pub offline: bool,
}

/// Provider details shown by `/config`.
struct SessionInfo {
    provider_name: String,
    endpoint: String,
    model: String,
    tts_model: String,
}

/// An interactive session around the result panel.
///
/// Each non-command input is treated as one product description and run
/// through the full pipeline; slash commands steer the panel itself.
struct PanelSession {
    info: SessionInfo,
    panel: Panel,
}

impl PanelSession {
    fn new(composition: Composition) -> Self {
        let panel =
            Panel::new(composition.pipeline, composition.language).with_speed(composition.speed);
        Self {
            info: SessionInfo {
                provider_name: composition.provider_name,
                endpoint: composition.endpoint,
                model: composition.model,
                tts_model: composition.tts_model,
            },
            panel,
        }
    }

    async fn run(&mut self) -> Result<()> {
        print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(PanelCommandCompleter)
                .with_help_message(
                    "Paste a product description, /help for commands, Ctrl+C to quit",
                )
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.run_pipeline(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.panel.close();
        print_goodbye();
        Ok(())
    }

    async fn run_pipeline(&mut self, text: &str) {
        let spinner = Spinner::pipeline_run();
        self.panel.run(text).await;
        spinner.stop();

        print!("{}", self.panel.render());
        println!();
    }

    fn handle_command(&mut self, cmd: PanelCommand) -> bool {
        match cmd {
            PanelCommand::Lang(code) => {
                self.set_language(code.as_deref());
                true
            }
            PanelCommand::Replay => {
                if self.panel.state().audio.is_some() {
                    self.panel.replay();
                } else {
                    print_error("No audio to replay yet");
                }
                true
            }
            PanelCommand::Close => {
                self.panel.close();
                true
            }
            PanelCommand::Config => {
                self.print_config();
                true
            }
            PanelCommand::Help => {
                print_help();
                true
            }
            PanelCommand::Quit => false,
            PanelCommand::Unknown(cmd) => {
                print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn set_language(&mut self, code: Option<&str>) {
        let Some(code) = code else {
            print_error("Usage: /lang <ja|ko>");
            return;
        };

        match code.parse::<Language>() {
            Ok(language) => {
                self.panel.set_language(language);
                println!(
                    "{} Target language set to {}",
                    Style::success("✓"),
                    Style::value(language.display_name())
                );
            }
            Err(e) => print_error(&e.to_string()),
        }
    }

    fn print_config(&self) {
        println!("{}", Style::header("Configuration"));
        println!(
            "  {}    {}",
            Style::label("provider"),
            Style::value(&self.info.provider_name)
        );
        println!(
            "  {}       {}",
            Style::label("model"),
            Style::value(&self.info.model)
        );
        println!(
            "  {}   {}",
            Style::label("tts model"),
            Style::value(&self.info.tts_model)
        );
        println!(
            "  {}    {}",
            Style::label("language"),
            Style::value(self.panel.state().language.code())
        );
        println!(
            "  {}    {}",
            Style::label("endpoint"),
            Style::secondary(&self.info.endpoint)
        );
        println!();
    }
}

pub async fn run_panel(options: PanelOptions) -> Result<()> {
    let composition = compose(&ComposeOptions {
        to: options.to,
        provider: options.provider,
        model: options.model,
        speed: options.speed,
        glossary: options.glossary,
        offline: options.offline,
    })?;

    PanelSession::new(composition).run().await
}

fn print_header() {
    println!(
        "{} {} - Interactive Panel Mode",
        Style::header("koe"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}    {}",
        Style::command("/lang"),
        Style::secondary("Select target language (ja or ko)")
    );
    println!(
        "  {}  {}",
        Style::command("/replay"),
        Style::secondary("Replay the last audio")
    );
    println!(
        "  {}   {}",
        Style::command("/close"),
        Style::secondary("Close the result panel")
    );
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit panel mode")
    );
    println!();
}

fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
