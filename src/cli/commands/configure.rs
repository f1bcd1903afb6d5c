//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, KoeConfig};
use crate::pipeline::Language;
use crate::speech::{MAX_SPEED, MIN_SPEED};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// With `--show` only prints the current defaults; otherwise interactively
/// sets the default provider, models, target language, and speech speed.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new();
        print_current_defaults(&manager.load_or_default());
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    // Check if at least one provider is configured
    if config.providers.is_empty() {
        bail!(
            "No providers configured.\n\n\
             Add providers to ~/.config/koe/config.toml first.\n\
             Run 'koe providers' to see the expected format."
        );
    }

    // Display current defaults
    print_current_defaults(&config);

    // Get provider names for selection
    let provider_names: Vec<String> = config.providers.keys().cloned().collect();

    // Select default provider
    let default_provider = config.koe.provider.clone();
    let provider = select_provider(&provider_names, default_provider.as_deref())?;

    // Get models for the selected provider
    let provider_config = config.providers.get(&provider);
    let available_models: Vec<String> = provider_config
        .map(|p| p.models.clone())
        .unwrap_or_default();

    // Select default chat model
    let default_model = config.koe.model.clone();
    let model = select_model(&available_models, default_model.as_deref())?;

    // Enter default speech model
    let default_tts_model = config.koe.tts_model.clone();
    let tts_model = enter_tts_model(default_tts_model.as_deref())?;

    // Select default target language
    let default_to = config.koe.to.clone();
    let to = select_target_language(default_to.as_deref())?;

    // Enter default speech speed (optional)
    let speed = enter_speed(config.koe.speed)?;

    // Update config
    config.koe = KoeConfig {
        provider: Some(provider),
        model: Some(model),
        tts_model: Some(tts_model),
        to: Some(to),
        speed,
    };

    // Save config
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        config
            .koe
            .provider
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        config
            .koe
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("tts model"),
        config
            .koe
            .tts_model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        config
            .koe
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("speed"),
        config.koe.speed.map_or_else(
            || Style::secondary("(not set)"),
            |s| Style::value(s.to_string())
        )
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        // No models configured, fall back to text input
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        // Models available, use selection
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn enter_tts_model(default: Option<&str>) -> Result<String> {
    let prompt = Text::new("Default speech model:")
        .with_help_message("Enter the text-to-speech model name")
        .with_default(default.unwrap_or(crate::config::DEFAULT_TTS_MODEL));

    let model = prompt.prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.trim().to_string())
}

fn select_target_language(default: Option<&str>) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.display_name()))
        .collect();

    let default_index = default
        .and_then(|d| Language::ALL.iter().position(|lang| lang.code() == d))
        .unwrap_or(0);

    let selection = Select::new("Default target language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn enter_speed(default: Option<f32>) -> Result<Option<f32>> {
    let mut prompt = Text::new("Default speech speed:")
        .with_help_message("0.25 to 4.0, empty to leave unset");

    let rendered;
    if let Some(d) = default {
        rendered = d.to_string();
        prompt = prompt.with_default(&rendered);
    }

    let input = prompt.prompt()?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    let speed: f32 = input
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid speed: '{input}'"))?;

    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        bail!("Speed must be between {MIN_SPEED} and {MAX_SPEED}");
    }

    Ok(Some(speed))
}
