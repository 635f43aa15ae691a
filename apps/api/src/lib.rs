//! Leadership profiler: builds prompts from leadership documents, sends them
//! to a chat completion endpoint and hands back the model's text.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError};
pub use llm_client::{CompletionRequest, CompletionService, LlmClient, LlmError};
pub use models::document::ChunkMetadata;
pub use profile::sections::{parse_profile, ProfileParseError, ProfileSection, SectionLabel};
pub use profile::ProfileGenerator;
