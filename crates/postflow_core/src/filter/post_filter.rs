//! Post filtering with AND semantics across independent selections.
//!
//! # Responsibility
//! - Match posts against type, tone and feature selections.
//! - Keep legacy records (no type/tone metadata) visible under every
//!   selection.
//!
//! # Invariants
//! - Filtering never mutates the underlying collection.
//! - Filtering is idempotent: re-applying the same filter to its own output
//!   yields the same set.
//! - A post lacking both `post_type` and `tone` passes every filter
//!   unconditionally (backward-compatibility policy, preserved on purpose).

use crate::model::post::Post;

/// Feature-presence selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeatureFilter {
    #[default]
    All,
    HasCaption,
    HasVisual,
}

/// Filter selections; `None` means "all" for type and tone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub post_type: Option<String>,
    pub tone: Option<String>,
    pub feature: FeatureFilter,
}

impl PostFilter {
    /// Returns whether one post satisfies every selected predicate.
    pub fn matches(&self, post: &Post) -> bool {
        if post.is_legacy() {
            return true;
        }

        let type_ok = match (&self.post_type, &post.post_type) {
            (Some(wanted), Some(actual)) => wanted == actual,
            // Missing metadata passes the corresponding filter.
            _ => true,
        };
        let tone_ok = match (&self.tone, &post.tone) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        };
        let feature_ok = match self.feature {
            FeatureFilter::All => true,
            FeatureFilter::HasCaption => post.caption.is_some(),
            FeatureFilter::HasVisual => post.visual_suggestion_url.is_some(),
        };

        type_ok && tone_ok && feature_ok
    }

    /// Derives the filtered subsequence, preserving input order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

/// Distinct tones present in the collection, in first-appearance order.
///
/// The tone selector offers what the data contains rather than a static
/// enum.
pub fn available_tones(posts: &[Post]) -> Vec<String> {
    let mut tones: Vec<String> = Vec::new();
    for post in posts {
        if let Some(tone) = &post.tone {
            if !tones.iter().any(|seen| seen == tone) {
                tones.push(tone.clone());
            }
        }
    }
    tones
}
