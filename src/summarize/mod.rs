//! Summarization service.
//!
//! Produces a fixed-length bullet summary of the original text. The 5-point
//! count is a hard post-condition on the parsed output, not a retry trigger.

use std::sync::Arc;

use crate::error::PipelineError;
use crate::pipeline::Language;
use crate::provider::{ChatClient, ChatRequest};

/// Exact number of summary points demanded of the model and enforced
/// post-parse.
pub const SUMMARY_POINT_COUNT: usize = 5;

// Moderate temperature; summaries tolerate more variation than translations.
const SUMMARY_TEMPERATURE: f32 = 0.5;

pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "You are a high-quality summarization system. Summarize the following text \
     in {target_language} as exactly 5 bullet points. \
     Condense each point into one sentence and prioritize the most important information. \
     Use this output format:\n\
     - point 1\n\
     - point 2\n\
     - point 3\n\
     - point 4\n\
     - point 5\n\
     Respond with exactly 5 bullet points, no more and no fewer.";

/// One summary, produced fresh per run and never persisted.
///
/// Invariant: `points.len() == 5`, enforced by [`Summarizer::summarize`].
#[derive(Debug, Clone)]
pub struct SummaryResult {
    pub original_text: String,
    pub points: Vec<String>,
    pub language: Language,
}

/// Builds the system instruction for a summarization request.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_summary_prompt(language: Language) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SUMMARY_PROMPT_TEMPLATE.replace("{target_language}", language.display_name())
}

/// Parses bullet lines out of a raw model reply.
///
/// Retains only lines whose trimmed form begins with the bullet marker,
/// stripping the marker and surrounding whitespace from each.
pub fn parse_points(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| line.trim().strip_prefix('-'))
        .map(|point| point.trim().to_string())
        .collect()
}

/// True iff the parsed summary holds exactly 5 points.
pub fn point_count_valid(points: &[String]) -> bool {
    points.len() == SUMMARY_POINT_COUNT
}

/// Summarizes product descriptions through an injected chat client.
pub struct Summarizer {
    chat: Arc<dyn ChatClient>,
    model: String,
}

impl Summarizer {
    pub fn new(chat: Arc<dyn ChatClient>, model: String) -> Self {
        Self { chat, model }
    }

    /// Summarizes `text` into exactly 5 points in the target language.
    pub async fn summarize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SummaryResult, PipelineError> {
        let request = ChatRequest {
            model: self.model.clone(),
            system_prompt: build_summary_prompt(language),
            user_text: text.to_string(),
            temperature: SUMMARY_TEMPERATURE,
        };

        let reply = self
            .chat
            .complete(&request)
            .await
            .map_err(PipelineError::Summary)?;

        let points = parse_points(&reply);

        if !point_count_valid(&points) {
            return Err(PipelineError::FormatViolation(
                "summary must contain 5 points".to_string(),
            ));
        }

        Ok(SummaryResult {
            original_text: text.to_string(),
            points,
            language,
        })
    }
}
