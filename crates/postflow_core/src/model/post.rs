//! Post domain model and derived enrichment shapes.
//!
//! # Responsibility
//! - Define the canonical post record and everything derivable from it.
//! - Provide the content-replacement helper that invalidates derived fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another post.
//! - Replacing `content` clears every field computed from it (caption,
//!   visual suggestion, variations, engagement prediction).
//! - `is_saved` is monotonic: no operation unsets it.

use crate::model::campaign::GenerationSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a post.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PostId = Uuid;

/// Structured caption attached to exactly one post.
///
/// `tags` nominally holds 20 entries per the generation contract; the core
/// does not enforce the count. The `Default` value doubles as the decode
/// fallback shape for malformed provider responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub paragraph: String,
    pub cta_text: String,
    pub destination_url: String,
    pub tags: Vec<String>,
}

/// Per-platform rewrites of one post's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVariations {
    pub twitter: String,
    pub linked_in: String,
    pub reel_script: String,
    pub linked_in_article: String,
    pub pinterest_description: String,
}

/// Predicted engagement for one post.
///
/// `score` is 1-10 from the provider; the decode fallback uses 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub score: u8,
    pub feedback: String,
}

/// Raw post draft returned by the generation operation.
///
/// The provider-assigned `id` is discarded on ingest; the core always mints
/// its own stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub id: String,
    pub content: String,
}

/// One generated content item, independently enrichable.
///
/// `post_type` and `tone` are optional because snapshots written before those
/// fields existed omit them; such legacy records must keep deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable id used across generated, scheduled and history collections.
    pub id: PostId,
    /// Base content every enrichment is derived from.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,
    #[serde(default)]
    pub ctas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_suggestion_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<PostVariations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_prediction: Option<EngagementPrediction>,
    /// Marks the post as eligible for calendar scheduling.
    #[serde(default)]
    pub is_saved: bool,
}

impl Post {
    /// Creates a bare post with a fresh stable id and no enrichments.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            post_type: None,
            tone: None,
            caption: None,
            ctas: Vec::new(),
            visual_suggestion_url: None,
            variations: None,
            engagement_prediction: None,
            is_saved: false,
        }
    }

    /// Builds a post from a provider draft plus the settings of the
    /// generation run that produced it.
    ///
    /// The draft's own id is intentionally dropped; identity is minted here
    /// and never changes afterwards.
    pub fn from_draft(draft: PostDraft, settings: &GenerationSettings, ctas: &[String]) -> Self {
        let mut post = Self::new(draft.content);
        post.post_type = Some(settings.post_type.clone());
        post.tone = Some(settings.tone.clone());
        post.ctas = ctas.to_vec();
        post
    }

    /// Replaces the base content and clears every derived field.
    ///
    /// # Invariants
    /// - `id` is preserved.
    /// - `caption`, `visual_suggestion_url`, `variations` and
    ///   `engagement_prediction` are always cleared, stale enrichments must
    ///   never survive a content change through this path.
    pub fn replace_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.caption = None;
        self.visual_suggestion_url = None;
        self.variations = None;
        self.engagement_prediction = None;
    }

    /// Returns whether the post carries no type/tone metadata at all.
    ///
    /// Such records predate the filterable metadata and pass every filter.
    pub fn is_legacy(&self) -> bool {
        self.post_type.is_none() && self.tone.is_none()
    }
}
