//! Text-transform collaborator — rewrites resume text against a job description.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_OUTPUT_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::tailoring::prompts::{system_prompt, user_prompt};
use crate::tailoring::section::Section;

const TAILOR_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
#[error("Failed to tailor resume: {0}")]
pub struct TailorError(pub String);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub resume_content: String,
    pub job_description: String,
    #[serde(default)]
    pub section: Section,
    #[serde(default)]
    pub preserve_format: bool,
}

/// Returns revised text for the requested scope: the whole document for
/// `Section::All`, otherwise just the body of that section.
#[async_trait]
pub trait TextTransformer: Send + Sync {
    async fn tailor(&self, request: &TailorRequest) -> Result<String, TailorError>;
}

/// `TextTransformer` backed by the Claude API. One call per request.
#[derive(Clone)]
pub struct LlmTailor {
    llm: LlmClient,
}

impl LlmTailor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextTransformer for LlmTailor {
    async fn tailor(&self, request: &TailorRequest) -> Result<String, TailorError> {
        let system = format!(
            "{}\n\n{GROUNDING_INSTRUCTION}\n{PLAIN_OUTPUT_INSTRUCTION}",
            system_prompt(request.section)
        );
        let prompt = user_prompt(
            &request.resume_content,
            &request.job_description,
            request.section,
            request.preserve_format,
        );

        let revised = self
            .llm
            .call_text(&prompt, &system, TAILOR_TEMPERATURE)
            .await
            .map_err(|e| TailorError(e.to_string()))?;

        info!(
            "Tailored {} scope: {} chars in, {} chars out",
            request.section,
            request.resume_content.len(),
            revised.len()
        );
        Ok(revised)
    }
}
