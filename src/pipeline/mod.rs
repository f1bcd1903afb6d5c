//! Pipeline orchestration.
//!
//! One run drives the three services: translation and summarization both
//! depend only on the original text and run as concurrent tasks; speech
//! synthesis follows, voicing the translated text. The first failure aborts
//! the run and no partial results are surfaced.

pub mod language;

pub use language::{Language, print_languages};

use crate::error::PipelineError;
use crate::speech::{SpeechOptions, SpeechResult, Synthesizer};
use crate::summarize::{Summarizer, SummaryResult};
use crate::translate::{TranslationResult, Translator};

/// The aggregated results of one successful run.
#[derive(Debug)]
pub struct RunOutput {
    pub translation: TranslationResult,
    pub summary: SummaryResult,
    pub speech: SpeechResult,
}

/// The translate → summarize → speak call chain.
pub struct Pipeline {
    translator: Translator,
    summarizer: Summarizer,
    synthesizer: Synthesizer,
}

impl Pipeline {
    pub const fn new(
        translator: Translator,
        summarizer: Summarizer,
        synthesizer: Synthesizer,
    ) -> Self {
        Self {
            translator,
            summarizer,
            synthesizer,
        }
    }

    /// Runs the full chain for one block of source text.
    ///
    /// Summarization operates on the original text, not the translation;
    /// speech synthesis voices the translated text.
    pub async fn run(
        &self,
        text: &str,
        language: Language,
        speed: Option<f32>,
    ) -> Result<RunOutput, PipelineError> {
        let (translation, summary) = tokio::try_join!(
            self.translator.translate(text, language),
            self.summarizer.summarize(text, language),
        )?;

        let speech = self
            .synthesizer
            .synthesize(SpeechOptions {
                text: translation.translated_text.clone(),
                language,
                speed,
            })
            .await?;

        Ok(RunOutput {
            translation,
            summary,
            speech,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::glossary::Glossary;
    use crate::provider::{
        ChatClient, ChatRequest, FixtureClient, SpeechClient, SpeechRequest,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FailingChat;

    #[async_trait]
    impl ChatClient for FailingChat {
        async fn complete(&self, _request: &ChatRequest) -> Result<String, ProviderError> {
            Err(ProviderError::EmptyResponse)
        }
    }

    struct FailingSpeech;

    #[async_trait]
    impl SpeechClient for FailingSpeech {
        async fn synthesize(&self, _request: &SpeechRequest) -> Result<Vec<u8>, ProviderError> {
            Err(ProviderError::EmptyResponse)
        }
    }

    fn fixture_pipeline(language: Language) -> Pipeline {
        let client = Arc::new(FixtureClient::new(language));
        Pipeline::new(
            Translator::new(client.clone(), "gpt-4o".to_string(), Glossary::default()),
            Summarizer::new(client.clone(), "gpt-4o-mini".to_string()),
            Synthesizer::new(client, "tts-1".to_string()),
        )
    }

    #[tokio::test]
    async fn test_run_aggregates_all_three_results() {
        let pipeline = fixture_pipeline(Language::Ja);

        let output = pipeline
            .run("Our enterprise cloud platform.", Language::Ja, None)
            .await
            .unwrap();

        assert_eq!(output.translation.original_text, "Our enterprise cloud platform.");
        assert!(!output.translation.translated_text.is_empty());
        assert_eq!(output.summary.points.len(), 5);
        assert!(!output.speech.audio.is_empty());
        // Speech voices the translation, not the original
        assert_eq!(output.speech.text, output.translation.translated_text);
    }

    #[tokio::test]
    async fn test_chat_failure_aborts_the_run() {
        let failing = Arc::new(FailingChat);
        let fixture = Arc::new(FixtureClient::new(Language::Ko));
        let pipeline = Pipeline::new(
            Translator::new(failing, "gpt-4o".to_string(), Glossary::default()),
            Summarizer::new(fixture.clone(), "gpt-4o-mini".to_string()),
            Synthesizer::new(fixture, "tts-1".to_string()),
        );

        let err = pipeline.run("text", Language::Ko, None).await.unwrap_err();
        assert!(matches!(err, PipelineError::Translation(_)));
    }

    #[tokio::test]
    async fn test_speech_failure_aborts_the_run() {
        let fixture = Arc::new(FixtureClient::new(Language::Ja));
        let pipeline = Pipeline::new(
            Translator::new(fixture.clone(), "gpt-4o".to_string(), Glossary::default()),
            Summarizer::new(fixture, "gpt-4o-mini".to_string()),
            Synthesizer::new(Arc::new(FailingSpeech), "tts-1".to_string()),
        );

        let err = pipeline.run("text", Language::Ja, None).await.unwrap_err();
        assert!(matches!(err, PipelineError::Speech(_)));
        assert_eq!(err.to_string(), "speech generation failed");
    }
}
