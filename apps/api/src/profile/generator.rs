//! Profile generator: turns leadership documents into a profile or an answer.
//!
//! Flow for both operations: build prompt → one completion call → return text.
//! The returned text is exactly what the model produced. Nothing is parsed,
//! validated or retried here; see `sections::parse_profile` for the opt-in
//! parsing step.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm_client::prompts::LEADERSHIP_PERSONA;
use crate::llm_client::{CompletionRequest, CompletionService, LlmError, MODEL};
use crate::models::document::ChunkMetadata;
use crate::profile::prompts::{build_profile_prompt, build_question_prompt};

/// Low temperature for reproducible structured output.
pub const TEMPERATURE: f32 = 0.4;
/// Output bound for the six-section profile.
pub const PROFILE_MAX_TOKENS: u32 = 2000;
/// Question answers get more room than the profile.
pub const QUESTION_MAX_TOKENS: u32 = 4000;

/// The profile/question client. Holds the injected completion service and
/// the fixed persona; no other state.
#[derive(Clone)]
pub struct ProfileGenerator {
    service: Arc<dyn CompletionService>,
    persona: &'static str,
}

impl ProfileGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            persona: LEADERSHIP_PERSONA,
        }
    }

    pub fn persona(&self) -> &str {
        self.persona
    }

    /// Generates a leadership profile. The model is asked for a JSON array of
    /// `{section, content, sources}` objects; the caller owns validating that.
    pub async fn generate_profile<S: AsRef<str>>(
        &self,
        chunks: &[S],
        metadata: Option<&[ChunkMetadata]>,
    ) -> Result<String, LlmError> {
        if let Some(meta) = metadata {
            if meta.len() != chunks.len() {
                warn!(
                    "Metadata count {} does not match chunk count {}",
                    meta.len(),
                    chunks.len()
                );
            }
        }

        let prompt = build_profile_prompt(chunks, metadata);
        info!("Generating profile from {} chunks", chunks.len());

        self.service
            .complete(&CompletionRequest {
                system: self.persona,
                prompt: &prompt,
                model: MODEL,
                temperature: TEMPERATURE,
                max_tokens: PROFILE_MAX_TOKENS,
            })
            .await
    }

    /// Answers a free-form question against the document context.
    pub async fn answer_question<S: AsRef<str>>(
        &self,
        chunks: &[S],
        question: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_question_prompt(chunks, question);
        info!("Answering question over {} chunks", chunks.len());

        self.service
            .complete(&CompletionRequest {
                system: self.persona,
                prompt: &prompt,
                model: MODEL,
                temperature: TEMPERATURE,
                max_tokens: QUESTION_MAX_TOKENS,
            })
            .await
    }
}
