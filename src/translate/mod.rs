//! Translation service.
//!
//! Builds a glossary-aware system instruction, sends it with the raw source
//! text to the chat endpoint, and returns the reply verbatim. No
//! post-processing and no re-validation against the glossary.

mod prompt;

pub use prompt::{TRANSLATION_PROMPT_TEMPLATE, build_translation_prompt};

use std::sync::Arc;

use crate::error::PipelineError;
use crate::glossary::Glossary;
use crate::pipeline::Language;
use crate::provider::{ChatClient, ChatRequest};

// Low temperature: consistency over diversity.
const TRANSLATION_TEMPERATURE: f32 = 0.3;

/// Upper bound on translated-to-original character-count ratio.
const MAX_LENGTH_RATIO: f64 = 1.3;

/// Marker phrase a translation can carry to flag itself as over-length,
/// regardless of its numeric length.
const OVER_LENGTH_MARKER: &str = "그러나 이 번역은 너무 길어서 유효하지 않습니다";

/// One translation, produced fresh per run and never persisted.
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub language: Language,
}

/// Translates product descriptions through an injected chat client.
pub struct Translator {
    chat: Arc<dyn ChatClient>,
    model: String,
    glossary: Glossary,
}

impl Translator {
    pub fn new(chat: Arc<dyn ChatClient>, model: String, glossary: Glossary) -> Self {
        Self {
            chat,
            model,
            glossary,
        }
    }

    /// Translates `text` into the target language.
    ///
    /// Any transport or provider failure surfaces as the single generic
    /// translation error; there is no partial translation and no retry.
    pub async fn translate(
        &self,
        text: &str,
        language: Language,
    ) -> Result<TranslationResult, PipelineError> {
        let request = ChatRequest {
            model: self.model.clone(),
            system_prompt: build_translation_prompt(language, &self.glossary),
            user_text: text.to_string(),
            temperature: TRANSLATION_TEMPERATURE,
        };

        let translated_text = self
            .chat
            .complete(&request)
            .await
            .map_err(PipelineError::Translation)?;

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text,
            language,
        })
    }
}

/// Structural sanity check on translation verbosity.
///
/// Returns false when the translation flags itself via the over-length
/// marker; otherwise true iff the translated character count is under
/// 1.3x the original. Not enforced against live provider output.
pub fn translation_length_valid(original: &str, translated: &str) -> bool {
    if translated.contains(OVER_LENGTH_MARKER) {
        return false;
    }

    let original_len = original.chars().count() as f64;
    let translated_len = translated.chars().count() as f64;

    translated_len < original_len * MAX_LENGTH_RATIO
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;

    struct CannedChat(&'static str);

    #[async_trait]
    impl ChatClient for CannedChat {
        async fn complete(&self, _request: &ChatRequest) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingChat;

    #[async_trait]
    impl ChatClient for FailingChat {
        async fn complete(&self, _request: &ChatRequest) -> Result<String, ProviderError> {
            Err(ProviderError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn test_translate_returns_reply_verbatim() {
        let translator = Translator::new(
            Arc::new(CannedChat("翻訳されたテキスト")),
            "gpt-4o".to_string(),
            Glossary::default(),
        );

        let result = translator.translate("source text", Language::Ja).await.unwrap();

        assert_eq!(result.translated_text, "翻訳されたテキスト");
        assert_eq!(result.original_text, "source text");
        assert_eq!(result.language, Language::Ja);
    }

    #[tokio::test]
    async fn test_translate_failure_is_tagged() {
        let translator = Translator::new(
            Arc::new(FailingChat),
            "gpt-4o".to_string(),
            Glossary::default(),
        );

        let err = translator
            .translate("source text", Language::Ko)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Translation(_)));
        assert_eq!(err.to_string(), "translation failed");
    }

    #[test]
    fn test_length_valid_under_ratio() {
        let original = "This is a sample text for testing the translation length validation.";
        let translated = "이것은 번역 길이 검증을 위한 샘플 텍스트입니다.";
        assert!(translation_length_valid(original, translated));
    }

    #[test]
    fn test_length_invalid_over_ratio() {
        let original = "short";
        let translated = "a much, much longer translation than the original text";
        assert!(!translation_length_valid(original, translated));
    }

    #[test]
    fn test_length_ratio_bound_is_strict() {
        // 10 chars * 1.3 = 13; exactly 13 is invalid, 12 is valid
        let original = "0123456789";
        assert!(translation_length_valid(original, &"x".repeat(12)));
        assert!(!translation_length_valid(original, &"x".repeat(13)));
    }

    #[test]
    fn test_over_length_marker_overrides_numeric_length() {
        let original = "a reasonably long original text for the ratio check";
        let translated = format!("짧은 번역. {OVER_LENGTH_MARKER}");
        assert!(!translation_length_valid(original, &translated));
    }
}
