//! Project domain model.
//!
//! # Responsibility
//! - Define the campaign workspace record owning all posts derived from it.
//! - Provide id-based lookup helpers used by the mutation engine.
//!
//! # Invariants
//! - `id` is stable; the collection never holds two live projects with the
//!   same id.
//! - `history` is ordered most-recent-first and holds the latest
//!   materialization of each post id.

use crate::calendar::schedule::Schedule;
use crate::model::campaign::BrandInput;
use crate::model::post::{Post, PostId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// A named campaign workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub brand_info: BrandInput,
    /// Working set shown on the generation screen, most recent batch first.
    #[serde(default)]
    pub generated_posts: Vec<Post>,
    /// Calendar buckets keyed by canonical `YYYY-MM-DD` date keys.
    #[serde(default)]
    pub scheduled_posts: Schedule,
    /// Append-only record of generation results, most recent change first.
    #[serde(default)]
    pub history: Vec<Post>,
}

impl Project {
    /// Creates an empty project with a fresh stable id.
    pub fn new(name: impl Into<String>, brand_info: BrandInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand_info,
            generated_posts: Vec::new(),
            scheduled_posts: Schedule::default(),
            history: Vec::new(),
        }
    }

    /// Finds a post in the working set by id.
    pub fn find_post(&self, post_id: PostId) -> Option<&Post> {
        self.generated_posts.iter().find(|post| post.id == post_id)
    }

    /// Returns whether the working set contains the given post id.
    pub fn has_post(&self, post_id: PostId) -> bool {
        self.find_post(post_id).is_some()
    }
}
