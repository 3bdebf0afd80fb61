use postflow_core::engine::mutation::{
    apply_caption, apply_prediction, apply_regenerated, apply_shortened, apply_to_project,
    ingest_generated, mark_saved, MutationOutcome,
};
use postflow_core::{BrandInput, Caption, EngagementPrediction, Post, Project};
use uuid::Uuid;

fn brand() -> BrandInput {
    BrandInput {
        topic: "Summer sneakers".to_string(),
        details: "New drop".to_string(),
        url: "https://example.com".to_string(),
    }
}

fn sample_caption() -> Caption {
    Caption {
        paragraph: "Step into summer.".to_string(),
        cta_text: "Shop the drop".to_string(),
        destination_url: "https://example.com".to_string(),
        tags: vec!["summer".to_string(), "sneakers".to_string()],
    }
}

fn project_with_post(content: &str) -> (Project, Post) {
    let mut project = Project::new("Campaign", brand());
    let post = Post::new(content);
    project = ingest_generated(project, vec![post.clone()]);
    (project, post)
}

#[test]
fn ingest_prepends_to_generated_and_history() {
    let project = Project::new("Campaign", brand());
    let first = Post::new("first");
    let second = Post::new("second");

    let project = ingest_generated(project, vec![first.clone()]);
    let project = ingest_generated(project, vec![second.clone()]);

    assert_eq!(project.generated_posts[0].id, second.id);
    assert_eq!(project.generated_posts[1].id, first.id);
    assert_eq!(project.history[0].id, second.id);
    assert_eq!(project.history[1].id, first.id);
}

#[test]
fn regenerate_clears_derived_fields_and_preserves_id() {
    let (mut project, post) = project_with_post("original");
    project = apply_caption(project, post.id, sample_caption()).into_project();
    project.generated_posts[0].visual_suggestion_url = Some("asset://visual".to_string());
    project.generated_posts[0].engagement_prediction = Some(EngagementPrediction {
        score: 7,
        feedback: "Add a hook".to_string(),
    });

    let project = apply_regenerated(project, post.id, "rewritten");
    assert!(project.was_applied());
    let project = project.into_project();

    let updated = project.find_post(post.id).unwrap();
    assert_eq!(updated.id, post.id);
    assert_eq!(updated.content, "rewritten");
    assert!(updated.caption.is_none());
    assert!(updated.visual_suggestion_url.is_none());
    assert!(updated.variations.is_none());
    assert!(updated.engagement_prediction.is_none());
}

#[test]
fn regenerate_propagates_into_scheduled_copies() {
    let (mut project, post) = project_with_post("original");
    let date = "2025-06-01".parse().unwrap();
    project.scheduled_posts.schedule(post.clone(), date);

    let project = apply_regenerated(project, post.id, "rewritten").into_project();

    let scheduled = &project.scheduled_posts.posts_on(date)[0];
    assert_eq!(scheduled.id, post.id);
    assert_eq!(scheduled.content, "rewritten");
}

#[test]
fn regenerate_keeps_only_the_latest_history_entry_per_id() {
    let (project, post) = project_with_post("original");

    let project = apply_regenerated(project, post.id, "second").into_project();
    let project = apply_regenerated(project, post.id, "third").into_project();

    let entries: Vec<&Post> = project
        .history
        .iter()
        .filter(|entry| entry.id == post.id)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "third");
    assert_eq!(project.history[0].id, post.id);
}

#[test]
fn regenerate_unknown_post_is_a_tagged_noop() {
    let (project, _post) = project_with_post("original");
    let before = project.clone();

    let outcome = apply_regenerated(project, Uuid::new_v4(), "rewritten");
    assert!(!outcome.was_applied());
    assert_eq!(outcome.into_project(), before);
}

#[test]
fn enrichment_does_not_touch_scheduled_copies() {
    let (mut project, post) = project_with_post("original");
    let date = "2025-06-01".parse().unwrap();
    project.scheduled_posts.schedule(post.clone(), date);

    let project = apply_caption(project, post.id, sample_caption()).into_project();

    assert!(project.find_post(post.id).unwrap().caption.is_some());
    assert!(project.scheduled_posts.posts_on(date)[0].caption.is_none());
    // History keeps the pre-enrichment materialization as well.
    assert!(project.history[0].caption.is_none());
}

#[test]
fn shorten_replaces_content_without_clearing_enrichments() {
    let (project, post) = project_with_post("a rather long piece of content");
    let project = apply_caption(project, post.id, sample_caption()).into_project();

    let project = apply_shortened(project, post.id, "short".to_string()).into_project();

    let updated = project.find_post(post.id).unwrap();
    assert_eq!(updated.content, "short");
    assert!(updated.caption.is_some());
}

#[test]
fn prediction_attaches_to_the_matching_post_only() {
    let mut project = Project::new("Campaign", brand());
    let first = Post::new("first");
    let second = Post::new("second");
    project = ingest_generated(project, vec![first.clone(), second.clone()]);

    let prediction = EngagementPrediction {
        score: 9,
        feedback: "Strong hook".to_string(),
    };
    let project = apply_prediction(project, second.id, prediction.clone()).into_project();

    assert!(project.find_post(first.id).unwrap().engagement_prediction.is_none());
    assert_eq!(
        project.find_post(second.id).unwrap().engagement_prediction,
        Some(prediction)
    );
}

#[test]
fn mark_saved_is_monotonic() {
    let (project, post) = project_with_post("original");

    let project = mark_saved(project, post.id).into_project();
    assert!(project.find_post(post.id).unwrap().is_saved);

    // Saving again keeps the flag; nothing unsets it.
    let project = mark_saved(project, post.id).into_project();
    assert!(project.find_post(post.id).unwrap().is_saved);
}

#[test]
fn apply_to_project_leaves_other_projects_untouched() {
    let target = Project::new("Target", brand());
    let bystander = Project::new("Bystander", brand());
    let target_id = target.id;
    let bystander_before = bystander.clone();

    let projects = apply_to_project(vec![target, bystander], target_id, |project| {
        ingest_generated(project, vec![Post::new("fresh")])
    });

    assert_eq!(projects[0].generated_posts.len(), 1);
    assert_eq!(projects[1], bystander_before);
}

#[test]
fn apply_to_project_with_unknown_id_changes_nothing() {
    let project = Project::new("Only", brand());
    let before = vec![project];

    let after = apply_to_project(before.clone(), Uuid::new_v4(), |project| {
        ingest_generated(project, vec![Post::new("fresh")])
    });

    assert_eq!(after, before);
}

#[test]
fn skipped_outcome_exposes_the_untouched_project() {
    let (project, post) = project_with_post("original");
    let outcome = apply_caption(project.clone(), Uuid::new_v4(), sample_caption());

    assert!(matches!(outcome, MutationOutcome::Skipped(_)));
    let unchanged = outcome.into_project();
    assert_eq!(unchanged, project);
    assert!(unchanged.find_post(post.id).unwrap().caption.is_none());
}
