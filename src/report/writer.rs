//! Seam for the external text-generation service

use crate::config::GenerationConfig;
use crate::error::ReportError;

/// Produces the narrative content of one report section.
///
/// Implementations that call a remote service receive their
/// [`GenerationConfig`] at construction; nothing is read from global state.
pub trait SectionWriter {
    fn write_section(&self, title: &str, prompt: &str) -> Result<String, ReportError>;
}

/// Offline writer for dry runs: each section holds the prompt that would be sent
#[derive(Debug, Clone)]
pub struct PromptPreviewWriter {
    config: GenerationConfig,
}

impl PromptPreviewWriter {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl SectionWriter for PromptPreviewWriter {
    fn write_section(&self, _title: &str, prompt: &str) -> Result<String, ReportError> {
        Ok(format!(
            "[prompt for {} (max {} tokens)]\n{}",
            self.config.model, self.config.max_tokens, prompt
        ))
    }
}
