use postflow_core::{available_tones, Caption, FeatureFilter, Post, PostFilter};

fn tagged_post(content: &str, post_type: &str, tone: &str) -> Post {
    let mut post = Post::new(content);
    post.post_type = Some(post_type.to_string());
    post.tone = Some(tone.to_string());
    post
}

fn with_caption(mut post: Post) -> Post {
    post.caption = Some(Caption {
        paragraph: "caption".to_string(),
        cta_text: "Shop now".to_string(),
        destination_url: "https://example.com".to_string(),
        tags: vec!["tag".to_string()],
    });
    post
}

#[test]
fn default_filter_matches_everything() {
    let posts = vec![
        tagged_post("a", "Reel", "Bold"),
        tagged_post("b", "Static", "Professional"),
        Post::new("legacy"),
    ];

    let selected = PostFilter::default().apply(&posts);
    assert_eq!(selected.len(), posts.len());
}

#[test]
fn selections_combine_with_and_semantics() {
    let posts = vec![
        with_caption(tagged_post("match", "Reel", "Bold")),
        tagged_post("wrong tone", "Reel", "Professional"),
        with_caption(tagged_post("wrong type", "Static", "Bold")),
        tagged_post("no caption", "Reel", "Bold"),
    ];

    let filter = PostFilter {
        post_type: Some("Reel".to_string()),
        tone: Some("Bold".to_string()),
        feature: FeatureFilter::HasCaption,
    };

    let selected = filter.apply(&posts);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].content, "match");
}

#[test]
fn feature_filter_selects_by_enrichment_presence() {
    let mut visual = tagged_post("visual", "Reel", "Bold");
    visual.visual_suggestion_url = Some("asset://visual".to_string());
    let posts = vec![
        with_caption(tagged_post("captioned", "Reel", "Bold")),
        visual,
        tagged_post("bare", "Reel", "Bold"),
    ];

    let captions = PostFilter {
        feature: FeatureFilter::HasCaption,
        ..PostFilter::default()
    };
    let visuals = PostFilter {
        feature: FeatureFilter::HasVisual,
        ..PostFilter::default()
    };

    assert_eq!(captions.apply(&posts)[0].content, "captioned");
    assert_eq!(visuals.apply(&posts)[0].content, "visual");
}

#[test]
fn legacy_posts_pass_every_selection() {
    let legacy = Post::new("legacy, no metadata");
    let filter = PostFilter {
        post_type: Some("Reel".to_string()),
        tone: Some("Bold".to_string()),
        feature: FeatureFilter::HasCaption,
    };

    assert!(filter.matches(&legacy));
}

#[test]
fn a_single_missing_metadata_field_passes_its_own_selection() {
    let mut typed_only = Post::new("typed");
    typed_only.post_type = Some("Reel".to_string());

    let tone_filter = PostFilter {
        tone: Some("Bold".to_string()),
        ..PostFilter::default()
    };
    let type_filter = PostFilter {
        post_type: Some("Static".to_string()),
        ..PostFilter::default()
    };

    // No tone recorded: the tone selection cannot reject it.
    assert!(tone_filter.matches(&typed_only));
    // A recorded type that differs is rejected as usual.
    assert!(!type_filter.matches(&typed_only));
}

#[test]
fn filtering_is_idempotent() {
    let posts = vec![
        tagged_post("a", "Reel", "Bold"),
        tagged_post("b", "Static", "Bold"),
        Post::new("legacy"),
    ];
    let filter = PostFilter {
        tone: Some("Bold".to_string()),
        ..PostFilter::default()
    };

    let once: Vec<Post> = filter.apply(&posts).into_iter().cloned().collect();
    let twice: Vec<Post> = filter.apply(&once).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

#[test]
fn filtering_preserves_input_order() {
    let posts = vec![
        tagged_post("first", "Reel", "Bold"),
        tagged_post("skipped", "Static", "Professional"),
        tagged_post("second", "Reel", "Bold"),
    ];
    let filter = PostFilter {
        tone: Some("Bold".to_string()),
        ..PostFilter::default()
    };

    let contents: Vec<&str> = filter
        .apply(&posts)
        .into_iter()
        .map(|post| post.content.as_str())
        .collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[test]
fn available_tones_are_distinct_in_first_appearance_order() {
    let posts = vec![
        tagged_post("a", "Reel", "Bold"),
        tagged_post("b", "Static", "Professional"),
        tagged_post("c", "Reel", "Bold"),
        Post::new("legacy"),
        tagged_post("d", "Carousel", "Minimal"),
    ];

    assert_eq!(
        available_tones(&posts),
        vec![
            "Bold".to_string(),
            "Professional".to_string(),
            "Minimal".to_string()
        ]
    );
}

#[test]
fn available_tones_of_an_untagged_collection_is_empty() {
    let posts = vec![Post::new("a"), Post::new("b")];
    assert!(available_tones(&posts).is_empty());
}
