//! Speech synthesis service.
//!
//! Sends translated text to the TTS endpoint and wraps the returned binary
//! payload in a revocable [`AudioHandle`].

mod handle;
mod player;

pub use handle::AudioHandle;
pub use player::Player;

use std::sync::Arc;

use crate::error::PipelineError;
use crate::pipeline::Language;
use crate::provider::{SpeechClient, SpeechRequest};

const DEFAULT_SPEED: f32 = 1.0;
/// Lower bound accepted by the speech endpoint.
pub const MIN_SPEED: f32 = 0.25;
/// Upper bound accepted by the speech endpoint.
pub const MAX_SPEED: f32 = 4.0;

// 128 kbps mp3 stream
const AUDIO_FORMAT: &str = "mp3";

/// Both supported languages share one multilingual voice.
const fn voice_for(_language: Language) -> &'static str {
    "shimmer"
}

/// Options for one synthesis call.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    pub text: String,
    pub language: Language,
    /// Playback speed, clamped to 0.25-4.0. Defaults to 1.0.
    pub speed: Option<f32>,
}

/// One synthesis result, produced fresh per run and never persisted.
#[derive(Debug)]
pub struct SpeechResult {
    pub audio: AudioHandle,
    pub text: String,
    pub language: Language,
}

/// Synthesizes speech through an injected speech client.
pub struct Synthesizer {
    speech: Arc<dyn SpeechClient>,
    model: String,
}

impl Synthesizer {
    pub fn new(speech: Arc<dyn SpeechClient>, model: String) -> Self {
        Self { speech, model }
    }

    /// Synthesizes audio for the given text.
    ///
    /// Any provider or transport error surfaces as the single generic
    /// speech error.
    pub async fn synthesize(&self, options: SpeechOptions) -> Result<SpeechResult, PipelineError> {
        let speed = options
            .speed
            .unwrap_or(DEFAULT_SPEED)
            .clamp(MIN_SPEED, MAX_SPEED);

        let request = SpeechRequest {
            model: self.model.clone(),
            voice: voice_for(options.language).to_string(),
            input: options.text.clone(),
            speed,
            response_format: AUDIO_FORMAT.to_string(),
        };

        let payload = self
            .speech
            .synthesize(&request)
            .await
            .map_err(PipelineError::Speech)?;

        let audio = AudioHandle::from_bytes(&payload).map_err(PipelineError::Speech)?;

        Ok(SpeechResult {
            audio,
            text: options.text,
            language: options.language,
        })
    }
}
