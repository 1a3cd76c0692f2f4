//! Question and feedback generator implementations.

pub mod gemini;
pub mod prompts;
pub mod scripted;

pub use gemini::GeminiGenerator;
pub use scripted::{ScriptedBehavior, ScriptedGenerator};

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{GeneratorConfig, GeneratorProvider};
use crate::domain::ports::InterviewGenerator;

/// Build the generator selected by configuration.
pub fn create_generator(config: &GeneratorConfig) -> DomainResult<Arc<dyn InterviewGenerator>> {
    match config.provider {
        GeneratorProvider::Scripted => Ok(Arc::new(ScriptedGenerator::new())),
        GeneratorProvider::Gemini => Ok(Arc::new(GeminiGenerator::new(config.clone())?)),
    }
}
