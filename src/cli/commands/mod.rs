//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive panel mode handler.
pub mod panel;

/// Provider listing command handler.
pub mod providers;

/// One-shot pipeline run handler.
pub mod run;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::glossary::Glossary;
use crate::pipeline::{Language, Pipeline};
use crate::provider::{ChatClient, FixtureClient, OpenAiClient, SpeechClient};
use crate::speech::Synthesizer;
use crate::summarize::Summarizer;
use crate::translate::Translator;

// Model names used for offline runs, where no provider is resolved.
// The fixture client ignores them.
const OFFLINE_CHAT_MODEL: &str = "gpt-4o";
const OFFLINE_TTS_MODEL: &str = "tts-1";

/// Everything a command needs to drive the pipeline, plus the provider
/// details panel mode shows in `/config`.
pub(crate) struct Composition {
    pub pipeline: Pipeline,
    pub language: Language,
    pub speed: Option<f32>,
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub tts_model: String,
}

/// Pipeline-affecting CLI options shared by the run and panel commands.
pub(crate) struct ComposeOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f32>,
    pub glossary: Option<String>,
    pub offline: bool,
}

/// The composition root: decides which client implementations to inject.
///
/// `--offline` selects the deterministic fixture client; everything else
/// resolves a provider and injects the live HTTP client. Services never
/// inspect the environment themselves.
pub(crate) fn compose(options: &ComposeOptions) -> Result<Composition> {
    let glossary = options
        .glossary
        .as_deref()
        .map_or_else(Glossary::load, |path| {
            Glossary::load_from_path(Path::new(path))
        });

    if options.offline {
        let language = options
            .to
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or(Language::Ja);

        let client = Arc::new(FixtureClient::new(language));
        let chat: Arc<dyn ChatClient> = client.clone();
        let speech: Arc<dyn SpeechClient> = client;

        return Ok(Composition {
            pipeline: Pipeline::new(
                Translator::new(chat.clone(), OFFLINE_CHAT_MODEL.to_string(), glossary),
                Summarizer::new(chat, OFFLINE_CHAT_MODEL.to_string()),
                Synthesizer::new(speech, OFFLINE_TTS_MODEL.to_string()),
            ),
            language,
            speed: options.speed,
            provider_name: "offline".to_string(),
            endpoint: "(fixture client, no network)".to_string(),
            model: OFFLINE_CHAT_MODEL.to_string(),
            tts_model: OFFLINE_TTS_MODEL.to_string(),
        });
    }

    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to.clone(),
            provider: options.provider.clone(),
            model: options.model.clone(),
            speed: options.speed,
        },
        &config_file,
    )?;

    let client = Arc::new(OpenAiClient::new(
        resolved.endpoint.clone(),
        resolved.api_key.clone(),
    ));
    let chat: Arc<dyn ChatClient> = client.clone();
    let speech: Arc<dyn SpeechClient> = client;

    Ok(Composition {
        pipeline: Pipeline::new(
            Translator::new(chat.clone(), resolved.model.clone(), glossary),
            Summarizer::new(chat, resolved.model.clone()),
            Synthesizer::new(speech, resolved.tts_model.clone()),
        ),
        language: resolved.target_language,
        speed: resolved.speed,
        provider_name: resolved.provider_name,
        endpoint: resolved.endpoint,
        model: resolved.model,
        tts_model: resolved.tts_model,
    })
}
