use crate::domain::model::{GeneratedText, GenerationOptions};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote text generation capability. Implementations make exactly one attempt per call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<GeneratedText>;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` when no usable credential is configured.
    fn api_key(&self) -> Option<&str>;
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
