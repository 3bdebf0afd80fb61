//! Campaign flow inputs and analysis shapes.
//!
//! # Responsibility
//! - Define what the user describes (brand input) and what the provider
//!   derives from it (analysis report, generation settings).
//!
//! # Invariants
//! - `AnalysisReport::default()` is the decode fallback for malformed
//!   provider responses and must stay cheap and empty-ish.

use serde::{Deserialize, Serialize};

/// Brand/campaign description entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    pub topic: String,
    pub details: String,
    pub url: String,
}

/// Post format suggested by the analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostFormat {
    Reel,
    Static,
    Carousel,
}

/// Tone of voice suggested by the analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneSuggestion {
    Professional,
    Bold,
    GenZ,
    Minimal,
    Luxury,
}

/// Structured result of the brand analysis operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub business_type: String,
    pub suggested_post_format: PostFormat,
    pub suggested_tone: ToneSuggestion,
    #[serde(rename = "suggestedCTAs")]
    pub suggested_ctas: Vec<String>,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            business_type: String::new(),
            suggested_post_format: PostFormat::Static,
            suggested_tone: ToneSuggestion::Professional,
            suggested_ctas: Vec::new(),
        }
    }
}

/// Settings chosen for one generation run.
///
/// `post_type` and `tone` stay free-form strings: the analysis enums seed
/// them, but the user can type anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub post_count: u32,
    pub post_type: String,
    pub tone: String,
    pub language: String,
}
