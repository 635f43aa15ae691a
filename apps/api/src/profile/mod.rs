// Leadership profile generation and document Q&A.
// All LLM calls go through a CompletionService, never direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sections;

pub use generator::ProfileGenerator;
