use async_trait::async_trait;

use super::{ChatClient, ChatRequest, SpeechClient, SpeechRequest};
use crate::error::ProviderError;
use crate::pipeline::Language;

const FIXTURE_TRANSLATION_JA: &str = "当社のエンタープライズクラウドプラットフォームは、現代のビジネスが効率的に業務を拡大するために設計された包括的なSaaSソリューションです。自動化されたワークフロー管理、リアルタイム分析ダッシュボード、既存のツールとの安全なAPI統合など、幅広い機能を提供しています。";

const FIXTURE_TRANSLATION_KO: &str = "당사의 엔터프라이즈 클라우드 플랫폼은 현대 비즈니스가 효율적으로 운영을 확장할 수 있도록 설계된 종합적인 SaaS 솔루션입니다. 자동화된 워크플로우 관리, 실시간 분석 대시보드 및 기존 도구와의 안전한 API 통합을 포함한 광범위한 기능을 제공합니다.";

const FIXTURE_SUMMARY_JA: &str = "- 包括的なSaaSソリューションである\n- ワークフロー管理を自動化する\n- リアルタイム分析ダッシュボードを提供する\n- 既存ツールと安全にAPI統合できる\n- サブスクリプションで全機能を利用できる";

const FIXTURE_SUMMARY_KO: &str = "- 종합적인 SaaS 솔루션이다\n- 워크플로우 관리를 자동화한다\n- 실시간 분석 대시보드를 제공한다\n- 기존 도구와 안전하게 API 통합이 가능하다\n- 구독으로 모든 기능을 이용할 수 있다";

/// Deterministic fixture client for offline runs and tests.
///
/// The response language is an explicit constructor parameter chosen at the
/// composition root; there is no process-wide mock state to thread through.
pub struct FixtureClient {
    language: Language,
}

impl FixtureClient {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    const fn translation_for(language: Language) -> &'static str {
        match language {
            Language::Ja => FIXTURE_TRANSLATION_JA,
            Language::Ko => FIXTURE_TRANSLATION_KO,
        }
    }

    const fn summary_for(language: Language) -> &'static str {
        match language {
            Language::Ja => FIXTURE_SUMMARY_JA,
            Language::Ko => FIXTURE_SUMMARY_KO,
        }
    }

    /// The system prompt names the target language; key the reply off it,
    /// falling back to the construction-time default.
    fn language_of(&self, system_prompt: &str) -> Language {
        if system_prompt.contains(Language::Ko.display_name()) {
            Language::Ko
        } else if system_prompt.contains(Language::Ja.display_name()) {
            Language::Ja
        } else {
            self.language
        }
    }
}

#[async_trait]
impl ChatClient for FixtureClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ProviderError> {
        let language = self.language_of(&request.system_prompt);

        // Summarization prompts demand the bullet format; everything else
        // is a translation request.
        let reply = if request.system_prompt.contains("bullet") {
            Self::summary_for(language)
        } else {
            Self::translation_for(language)
        };

        Ok(reply.to_string())
    }
}

#[async_trait]
impl SpeechClient for FixtureClient {
    async fn synthesize(&self, _request: &SpeechRequest) -> Result<Vec<u8>, ProviderError> {
        // A fixed-size payload with an MP3 frame-sync prefix.
        let mut payload = vec![0u8; 1024];
        payload[0] = 0xff;
        payload[1] = 0xfb;
        Ok(payload)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn chat_request(system_prompt: &str) -> ChatRequest {
        ChatRequest {
            model: "gpt-4o".to_string(),
            system_prompt: system_prompt.to_string(),
            user_text: "Our enterprise cloud platform.".to_string(),
            temperature: 0.3,
        }
    }

    #[tokio::test]
    async fn test_translation_reply_matches_language() {
        let ja = FixtureClient::new(Language::Ja);
        let ko = FixtureClient::new(Language::Ko);
        let request = chat_request("You are a professional translator.");

        assert_eq!(ja.complete(&request).await.unwrap(), FIXTURE_TRANSLATION_JA);
        assert_eq!(ko.complete(&request).await.unwrap(), FIXTURE_TRANSLATION_KO);
    }

    #[tokio::test]
    async fn test_prompt_language_overrides_default() {
        let client = FixtureClient::new(Language::Ja);
        let request = chat_request("Translate the following text into Korean.");

        assert_eq!(
            client.complete(&request).await.unwrap(),
            FIXTURE_TRANSLATION_KO
        );
    }

    #[tokio::test]
    async fn test_summary_reply_has_five_bullets() {
        let client = FixtureClient::new(Language::Ja);
        let request = chat_request("Summarize into exactly 5 bullet points.");

        let reply = client.complete(&request).await.unwrap();
        let bullets = reply.lines().filter(|l| l.starts_with('-')).count();
        assert_eq!(bullets, 5);
    }

    #[tokio::test]
    async fn test_synthesize_returns_fixed_payload() {
        let client = FixtureClient::new(Language::Ko);
        let request = SpeechRequest {
            model: "tts-1".to_string(),
            voice: "shimmer".to_string(),
            input: "테스트".to_string(),
            speed: 1.0,
            response_format: "mp3".to_string(),
        };

        let payload = client.synthesize(&request).await.unwrap();
        assert_eq!(payload.len(), 1024);
        assert_eq!(&payload[..2], &[0xff, 0xfb]);
    }
}
