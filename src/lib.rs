//! # koe - Translate, Summarize, and Voice Product Descriptions
//!
//! `koe` takes an English product description and produces a translation
//! into Japanese or Korean, a five-point summary, and synthesized speech
//! of the translation, using OpenAI-compatible API endpoints.
//!
//! ## Features
//!
//! - **Glossary-guided translation**: A bundled product-term glossary keeps
//!   brand vocabulary consistent across translations
//! - **Five-point summaries**: Every run yields exactly five bullet points
//!   in the target language
//! - **Speech synthesis**: The translation is voiced via a text-to-speech
//!   endpoint and can be played or saved
//! - **Interactive mode**: A panel-style session with `koe panel`
//! - **Offline mode**: `--offline` swaps in a deterministic fixture provider
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate and summarize a product description file
//! koe ./description.txt
//!
//! # From stdin, into Korean
//! cat description.txt | koe --to ko
//!
//! # Save and play the audio
//! koe --to ja --out voice.mp3 --play ./description.txt
//!
//! # Interactive panel mode
//! koe panel
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/koe/config.toml`:
//!
//! ```toml
//! [koe]
//! provider = "openai"
//! model = "gpt-4o"
//! tts_model = "tts-1"
//! to = "ja"
//!
//! [providers.openai]
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! models = ["gpt-4o", "gpt-4o-mini"]
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Error types for provider calls and pipeline runs.
pub mod error;

/// File system utilities.
pub mod fs;

/// Product-term glossary loading.
pub mod glossary;

/// Input reading from files and stdin.
pub mod input;

/// Quiet-aware output macros and configuration.
pub mod output;

/// The result panel and its slash commands.
pub mod panel;

/// Platform path helpers.
pub mod paths;

/// Pipeline orchestration and target languages.
pub mod pipeline;

/// Chat and speech API clients.
pub mod provider;

/// Speech synthesis, audio handles, and playback.
pub mod speech;

/// Five-point summarization.
pub mod summarize;

/// Glossary-guided translation.
pub mod translate;

/// Terminal UI helpers: styling and spinners.
pub mod ui;
