//! Pure mutators deriving the next project state from user-action results.
//!
//! # Responsibility
//! - Implement generation ingest, regeneration, enrichment write-backs and
//!   save-for-calendar as whole-state derivations.
//!
//! # Invariants
//! - Post ids are preserved by every mutator.
//! - Regeneration clears derived fields and propagates into scheduled
//!   copies; enrichments write back into the working set only. That
//!   asymmetry is intentional and load-bearing for the calendar view.
//! - `history` holds the latest materialization per post id, most recently
//!   changed first.

use crate::model::post::{Caption, EngagementPrediction, Post, PostId, PostVariations};
use crate::model::project::{Project, ProjectId};
use log::debug;

/// Result of a mutator that targets a single post.
///
/// `Skipped` carries the untouched project so callers can keep the
/// collection whole while choosing to log or ignore the miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied(Project),
    Skipped(Project),
}

impl MutationOutcome {
    pub fn into_project(self) -> Project {
        match self {
            Self::Applied(project) | Self::Skipped(project) => project,
        }
    }

    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Applies `mutator` to the project with id `active`, leaving every other
/// project untouched.
///
/// Unknown `active` ids leave the whole collection unchanged.
pub fn apply_to_project<F>(projects: Vec<Project>, active: ProjectId, mutator: F) -> Vec<Project>
where
    F: FnOnce(Project) -> Project,
{
    let mut mutator = Some(mutator);
    let mut next = Vec::with_capacity(projects.len());
    for project in projects {
        if project.id == active {
            if let Some(apply) = mutator.take() {
                next.push(apply(project));
                continue;
            }
        }
        next.push(project);
    }
    next
}

/// Prepends a freshly generated batch to the working set and the history.
///
/// Batch order is preserved; the newest batch sits at the front of both
/// collections.
pub fn ingest_generated(mut project: Project, posts: Vec<Post>) -> Project {
    let mut generated = posts.clone();
    generated.append(&mut project.generated_posts);
    project.generated_posts = generated;

    let mut history = posts;
    history.append(&mut project.history);
    project.history = history;

    project
}

/// Replaces a post's content after regeneration.
///
/// Clears every derived field, propagates the replacement into scheduled
/// copies of the same id, and rewrites history so only the latest
/// materialization of the id remains, at the front.
pub fn apply_regenerated(
    mut project: Project,
    post_id: PostId,
    new_content: &str,
) -> MutationOutcome {
    let Some(original) = project.find_post(post_id) else {
        debug!("event=mutation_skip module=engine action=regenerate post_id={post_id}");
        return MutationOutcome::Skipped(project);
    };

    let mut updated = original.clone();
    updated.replace_content(new_content);

    for post in project.generated_posts.iter_mut() {
        if post.id == post_id {
            *post = updated.clone();
        }
    }
    project.scheduled_posts.replace_post(post_id, &updated);

    project.history.retain(|post| post.id != post_id);
    project.history.insert(0, updated);

    MutationOutcome::Applied(project)
}

/// Attaches a generated caption to one post in the working set.
pub fn apply_caption(project: Project, post_id: PostId, caption: Caption) -> MutationOutcome {
    update_generated(project, post_id, "caption", |post| {
        post.caption = Some(caption);
    })
}

/// Replaces the caption of one post with its refined version.
pub fn apply_refined_caption(
    project: Project,
    post_id: PostId,
    caption: Caption,
) -> MutationOutcome {
    update_generated(project, post_id, "refine_caption", |post| {
        post.caption = Some(caption);
    })
}

/// Replaces a post's content with its shortened version.
///
/// Unlike regeneration this writes into the working set only and leaves
/// existing enrichments and scheduled copies as they are.
pub fn apply_shortened(project: Project, post_id: PostId, content: String) -> MutationOutcome {
    update_generated(project, post_id, "shorten", |post| {
        post.content = content;
    })
}

/// Attaches a visual suggestion reference to one post.
pub fn apply_visual_suggestion(
    project: Project,
    post_id: PostId,
    url: String,
) -> MutationOutcome {
    update_generated(project, post_id, "visual_suggestion", |post| {
        post.visual_suggestion_url = Some(url);
    })
}

/// Attaches platform variations to one post.
pub fn apply_variations(
    project: Project,
    post_id: PostId,
    variations: PostVariations,
) -> MutationOutcome {
    update_generated(project, post_id, "variations", |post| {
        post.variations = Some(variations);
    })
}

/// Attaches an engagement prediction to one post.
pub fn apply_prediction(
    project: Project,
    post_id: PostId,
    prediction: EngagementPrediction,
) -> MutationOutcome {
    update_generated(project, post_id, "prediction", |post| {
        post.engagement_prediction = Some(prediction);
    })
}

/// Marks a post as saved for calendar scheduling.
///
/// Saving is monotonic; nothing ever unsets the flag.
pub fn mark_saved(project: Project, post_id: PostId) -> MutationOutcome {
    update_generated(project, post_id, "save_for_calendar", |post| {
        post.is_saved = true;
    })
}

/// Applies an in-place edit to one working-set post, by id.
///
/// Enrichment write-backs deliberately do not touch `scheduled_posts` or
/// `history`; already scheduled copies keep their state.
fn update_generated<F>(
    mut project: Project,
    post_id: PostId,
    action: &str,
    edit: F,
) -> MutationOutcome
where
    F: FnOnce(&mut Post),
{
    match project.generated_posts.iter_mut().find(|post| post.id == post_id) {
        Some(post) => {
            edit(post);
            MutationOutcome::Applied(project)
        }
        None => {
            debug!("event=mutation_skip module=engine action={action} post_id={post_id}");
            MutationOutcome::Skipped(project)
        }
    }
}
