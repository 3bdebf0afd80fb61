//! Provider service contract.
//!
//! # Responsibility
//! - Define the nine content operations delegated to the external
//!   generative provider.
//! - Keep the core free of transport details; implementations own the
//!   network, credentials and prompt construction.
//!
//! # Invariants
//! - Implementations that cannot authenticate must fail with
//!   `ProviderError::NotConfigured` before any network access.
//! - JSON-producing operations must apply their decode fallback internally
//!   and therefore never fail on malformed response bodies alone.

use crate::model::campaign::{AnalysisReport, BrandInput, GenerationSettings};
use crate::model::post::{Caption, EngagementPrediction, Post, PostDraft, PostVariations};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure surfaced by a provider operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No credential/client configured; checked before any call.
    NotConfigured,
    /// Network or provider-side failure of one operation.
    Call {
        operation: &'static str,
        message: String,
    },
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => {
                write!(f, "generative provider is not initialized; set an API key first")
            }
            Self::Call { operation, message } => {
                write!(f, "provider call `{operation}` failed: {message}")
            }
        }
    }
}

impl Error for ProviderError {}

/// Contract for the external generative provider.
///
/// Each method mirrors one user-facing operation; inputs are the structured
/// context the operation needs, outputs are either free text or a typed
/// shape with a documented decode fallback.
pub trait GenerativeProvider {
    /// Analyzes brand input into a content strategy suggestion.
    fn analyze(&self, brand: &BrandInput) -> ProviderResult<AnalysisReport>;

    /// Generates a batch of post drafts for the given settings.
    fn generate_posts(
        &self,
        brand: &BrandInput,
        settings: &GenerationSettings,
        ctas: &[String],
    ) -> ProviderResult<Vec<PostDraft>>;

    /// Produces replacement content for an existing post. Plain text.
    fn regenerate(
        &self,
        original: &Post,
        brand: &BrandInput,
        instruction: &str,
        language: &str,
    ) -> ProviderResult<String>;

    /// Generates a structured caption for post content.
    fn generate_caption(
        &self,
        content: &str,
        brand: &BrandInput,
        language: &str,
    ) -> ProviderResult<Caption>;

    /// Refines an existing caption following an edit instruction.
    fn refine_caption(
        &self,
        content: &str,
        current: &Caption,
        instruction: &str,
        brand: &BrandInput,
        language: &str,
    ) -> ProviderResult<Caption>;

    /// Shortens post content. Plain text.
    fn shorten(&self, content: &str) -> ProviderResult<String>;

    /// Produces a displayable reference to a generated visual.
    ///
    /// The payload is opaque to the core; implementations typically return a
    /// data URL or asset location.
    fn visual_suggestion(&self, content: &str) -> ProviderResult<String>;

    /// Generates per-platform variations of post content.
    fn variations(&self, content: &str, language: &str) -> ProviderResult<PostVariations>;

    /// Predicts engagement for post content.
    fn predict_engagement(&self, content: &str) -> ProviderResult<EngagementPrediction>;
}
