//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, ProviderConfig};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With a provider name, shows that provider in detail; otherwise lists
/// every configured provider with its endpoint and models.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!(
            "Add providers to {}",
            Style::secondary("~/.config/koe/config.toml")
        );
        return Ok(());
    }

    let default_provider = config.koe.provider.as_deref();

    if let Some(name) = specific_provider {
        let Some(provider) = config.providers.get(name) else {
            bail!("Provider '{name}' not found");
        };
        print_provider_details(name, provider, default_provider == Some(name));
    } else {
        println!("{}", Style::header("Configured providers"));
        println!();
        for (name, provider) in &config.providers {
            let marker = if default_provider == Some(name.as_str()) {
                Style::secondary(" (default)")
            } else {
                String::new()
            };
            println!("  {}{marker}", Style::value(name));
            println!(
                "    {} {}",
                Style::label("endpoint:"),
                Style::secondary(&provider.endpoint)
            );
            if !provider.models.is_empty() {
                println!(
                    "    {} {}",
                    Style::label("models:"),
                    provider.models.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn print_provider_details(name: &str, provider: &ProviderConfig, is_default: bool) {
    let marker = if is_default {
        Style::secondary(" (default)")
    } else {
        String::new()
    };
    println!("{} {}{marker}", Style::header("Provider:"), Style::value(name));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&provider.endpoint)
    );
    if provider.requires_api_key() {
        let status = if provider.get_api_key().is_some() {
            "(set)"
        } else {
            "(not set)"
        };
        println!("  {}   {status}", Style::label("api key"));
    }
    if provider.models.is_empty() {
        println!(
            "  {}    {}",
            Style::label("models"),
            Style::secondary("(none configured)")
        );
    } else {
        println!("  {}", Style::label("models"));
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}
