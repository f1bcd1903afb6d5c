//! The result panel: orchestration state machine over the pipeline.
//!
//! State machine `idle → loading → {success, error}`, re-entrant: a new run
//! can start from any resting state. All state mutation happens on the
//! single control thread between suspension points, so no locking is needed.

pub mod command;
mod render;

pub use command::{Input, PanelCommand, PanelCommandCompleter, parse_input};
pub use render::render;

use crate::pipeline::{Language, Pipeline};
use crate::speech::{AudioHandle, Player};
use crate::summarize::SummaryResult;
use crate::translate::TranslationResult;

/// The single mutable state owned by the panel.
///
/// Replaced wholesale on each transition, never partially mutated outside
/// the orchestration routine. Result values are created fresh per run and
/// overwritten (releasing the previous audio handle) on the next one.
#[derive(Debug)]
pub struct PanelState {
    pub loading: bool,
    pub open: bool,
    pub error: Option<String>,
    pub translation: Option<TranslationResult>,
    pub summary: Option<SummaryResult>,
    pub audio: Option<AudioHandle>,
    pub language: Language,
}

impl PanelState {
    const fn idle(language: Language) -> Self {
        Self {
            loading: false,
            open: false,
            error: None,
            translation: None,
            summary: None,
            audio: None,
            language,
        }
    }
}

/// Drives the pipeline and owns the resulting UI state plus playback.
pub struct Panel {
    state: PanelState,
    pipeline: Pipeline,
    player: Player,
    speed: Option<f32>,
    autoplay: bool,
}

impl Panel {
    pub fn new(pipeline: Pipeline, language: Language) -> Self {
        Self {
            state: PanelState::idle(language),
            pipeline,
            player: Player::new(),
            speed: None,
            autoplay: true,
        }
    }

    pub const fn with_speed(mut self, speed: Option<f32>) -> Self {
        self.speed = speed;
        self
    }

    pub const fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Updates the selected language. Never triggers a run on its own.
    pub const fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    /// Runs the pipeline for one block of source text.
    ///
    /// Opens the panel and clears any prior error up front. On success all
    /// three results are stored together and playback starts; on failure
    /// only the error message is stored.
    pub async fn run(&mut self, text: &str) {
        self.state.loading = true;
        self.state.open = true;
        self.state.error = None;

        match self
            .pipeline
            .run(text, self.state.language, self.speed)
            .await
        {
            Ok(output) => {
                self.state.loading = false;
                self.state.translation = Some(output.translation);
                self.state.summary = Some(output.summary);
                // Overwriting the slot drops, and thus releases, the
                // previous audio handle.
                self.state.audio = Some(output.speech.audio);

                if self.autoplay {
                    if let Some(audio) = &self.state.audio {
                        self.player.play(audio);
                    }
                }
            }
            Err(e) => {
                self.state.loading = false;
                self.state.error = Some(e.to_string());
            }
        }
    }

    /// Closes the panel: stops and rewinds playback, hides the panel.
    ///
    /// Cached results are kept; visibility is driven by the open flag alone.
    /// Safe when no audio handle is held.
    pub fn close(&mut self) {
        self.player.stop();
        self.state.open = false;
    }

    /// Blocks until any running playback finishes.
    pub fn wait_for_playback(&mut self) {
        self.player.wait();
    }

    /// Replays the held audio from the start. No-op without a handle.
    pub fn replay(&mut self) {
        if let Some(audio) = &self.state.audio {
            self.player.play(audio);
        }
    }

    /// Renders the current state as panel text.
    pub fn render(&self) -> String {
        render::render(&self.state)
    }
}
