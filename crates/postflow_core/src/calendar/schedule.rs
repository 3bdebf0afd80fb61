//! Date-keyed scheduling buckets.
//!
//! # Responsibility
//! - Map calendar days to ordered lists of scheduled posts.
//! - Implement the schedule/unschedule/reschedule primitives driven by the
//!   drop resolvers.
//!
//! # Invariants
//! - A stored bucket is never empty; removal deletes the key instead.
//! - `schedule` performs no de-duplication: scheduling the same post twice
//!   to the same day yields two entries. This mirrors the historical
//!   behavior and is relied upon by callers that pre-check membership.
//! - `reschedule` does not special-case equal dates; the drop resolver must
//!   skip that case, otherwise the post moves to the end of the day list.

use crate::calendar::date_key::DateKey;
use crate::model::post::{Post, PostId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Ordered day buckets of scheduled posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    buckets: BTreeMap<DateKey, Vec<Post>>,
}

impl Schedule {
    /// Appends a post to the given day, creating the bucket if absent.
    pub fn schedule(&mut self, post: Post, date: DateKey) {
        self.buckets.entry(date).or_default().push(post);
    }

    /// Removes every entry with the given id from the given day.
    ///
    /// Deletes the day key entirely when the bucket empties. Removing an id
    /// that is not present is a no-op.
    pub fn unschedule(&mut self, post_id: PostId, date: DateKey) {
        if let Some(bucket) = self.buckets.get_mut(&date) {
            bucket.retain(|post| post.id != post_id);
            if bucket.is_empty() {
                self.buckets.remove(&date);
            }
        }
    }

    /// Moves a post from one day to another in a single mutation.
    ///
    /// The removal and the append happen together; the caller never observes
    /// a state where the post is in both buckets.
    pub fn reschedule(&mut self, post: Post, old_date: DateKey, new_date: DateKey) {
        self.unschedule(post.id, old_date);
        self.schedule(post, new_date);
    }

    /// Replaces every scheduled entry with the given id by `replacement`.
    ///
    /// Used by regeneration to propagate new content into already scheduled
    /// copies under the same identity.
    pub fn replace_post(&mut self, post_id: PostId, replacement: &Post) {
        for bucket in self.buckets.values_mut() {
            for entry in bucket.iter_mut() {
                if entry.id == post_id {
                    *entry = replacement.clone();
                }
            }
        }
    }

    /// Returns the posts scheduled on a day, oldest placement first.
    pub fn posts_on(&self, date: DateKey) -> &[Post] {
        self.buckets.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Finds one scheduled entry by id, wherever it currently lives.
    pub fn find_post(&self, post_id: PostId) -> Option<&Post> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .find(|post| post.id == post_id)
    }

    /// Returns the day a post is currently scheduled on, if any.
    pub fn date_of(&self, post_id: PostId) -> Option<DateKey> {
        self.buckets.iter().find_map(|(date, bucket)| {
            bucket.iter().any(|post| post.id == post_id).then_some(*date)
        })
    }

    pub fn contains_post(&self, post_id: PostId) -> bool {
        self.find_post(post_id).is_some()
    }

    /// Collects the ids of every scheduled post.
    pub fn scheduled_ids(&self) -> HashSet<PostId> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(|post| post.id))
            .collect()
    }

    /// Days that currently have at least one scheduled post.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[Post])> + '_ {
        self.buckets
            .iter()
            .map(|(date, bucket)| (*date, bucket.as_slice()))
    }

    /// Total number of scheduled entries across all days.
    pub fn total_posts(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
