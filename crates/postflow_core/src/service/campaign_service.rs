//! Campaign use-case service.
//!
//! # Responsibility
//! - Orchestrate the thirteen user actions: provider call, pure mutation,
//!   snapshot persistence.
//! - Own the explicit active-project selection and the campaign flow state.
//!
//! # Invariants
//! - Provider-backed actions check configuration before anything else.
//! - In-flight slots are cleared on every exit path, success or failure.
//! - Missing entities are tagged skips, never errors.
//! - The collection is persisted after every applied mutation; persistence
//!   failures are logged and do not fail the action.

use crate::calendar::date_key::DateKey;
use crate::calendar::drag::{self, DragPayload, DropAction};
use crate::engine::mutation::{self, MutationOutcome};
use crate::model::campaign::{AnalysisReport, BrandInput, GenerationSettings};
use crate::model::post::{Post, PostId};
use crate::model::project::{Project, ProjectId};
use crate::provider::spi::{GenerativeProvider, ProviderError, ProviderResult};
use crate::service::inflight::{ActionKind, InFlightTracker};
use crate::store::snapshot_store::{SnapshotStore, StoreResult};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ANALYZE_FAILURE: &str =
    "Failed to analyze content. Please check your API key and try again.";
const GENERATE_FAILURE: &str =
    "Failed to generate posts. Please check your API key and try again.";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure surfaced by a service action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No provider configured; refused before any provider access.
    NotConfigured,
    /// The provider call itself failed.
    Provider(ProviderError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => {
                write!(f, "generative provider is not configured; set an API key first")
            }
            Self::Provider(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotConfigured => None,
            Self::Provider(err) => Some(err),
        }
    }
}

/// Why an action was skipped without being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoActiveProject,
    ProjectNotFound(ProjectId),
    PostNotFound(PostId),
    /// Generation needs a prior analysis of the campaign input.
    NoAnalysis,
    /// The action needs the settings of a prior generation run.
    NoSettings,
    /// Caption refinement needs an existing caption.
    CaptionMissing(PostId),
    /// The drop resolved to no scheduling action.
    DropIgnored,
}

/// Tagged result of one user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Orchestrates campaign actions over the project collection.
///
/// All mutation is whole-state replacement through the pure engine; two
/// completing actions are serialized by arrival order, last write wins.
pub struct CampaignService<S: SnapshotStore, P: GenerativeProvider> {
    store: S,
    provider: Option<P>,
    projects: Vec<Project>,
    active_id: Option<ProjectId>,
    campaign_input: Option<BrandInput>,
    analysis: Option<AnalysisReport>,
    settings: Option<GenerationSettings>,
    in_flight: InFlightTracker,
    last_error: Option<String>,
}

impl<S: SnapshotStore, P: GenerativeProvider> CampaignService<S, P> {
    /// Opens the service, loading the full persisted collection before any
    /// mutation is accepted.
    pub fn open(store: S, provider: Option<P>) -> StoreResult<Self> {
        let projects = store.load()?;
        info!(
            "event=workspace_load module=service status=ok project_count={}",
            projects.len()
        );

        Ok(Self {
            store,
            provider,
            projects,
            active_id: None,
            campaign_input: None,
            analysis: None,
            settings: None,
            in_flight: InFlightTracker::default(),
            last_error: None,
        })
    }

    /// Installs or removes the provider credential-bound client.
    pub fn set_provider(&mut self, provider: Option<P>) {
        self.provider = provider;
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active_id(&self) -> Option<ProjectId> {
        self.active_id
    }

    pub fn active_project(&self) -> Option<&Project> {
        let active = self.active_id?;
        self.projects.iter().find(|project| project.id == active)
    }

    pub fn campaign_input(&self) -> Option<&BrandInput> {
        self.campaign_input.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    pub fn generation_settings(&self) -> Option<&GenerationSettings> {
        self.settings.as_ref()
    }

    pub fn in_flight(&self) -> &InFlightTracker {
        &self.in_flight
    }

    /// One-slot error banner; last failing action wins.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // --- Project management ---

    /// Creates a project and makes it the active one.
    pub fn create_project(&mut self, name: impl Into<String>, brand: BrandInput) -> ProjectId {
        let project = Project::new(name, brand.clone());
        let project_id = project.id;
        self.projects.push(project);
        self.active_id = Some(project_id);
        self.campaign_input = Some(brand);
        self.analysis = None;
        self.settings = None;
        info!("event=project_create module=service status=ok project_id={project_id}");
        self.persist();
        project_id
    }

    /// Selects an existing project as the active one and resets the
    /// campaign flow to its brand input.
    pub fn select_project(&mut self, project_id: ProjectId) -> Outcome {
        let Some(project) = self.projects.iter().find(|project| project.id == project_id) else {
            debug!("event=project_select module=service status=skip project_id={project_id}");
            return Outcome::Skipped(SkipReason::ProjectNotFound(project_id));
        };
        self.campaign_input = Some(project.brand_info.clone());
        self.active_id = Some(project_id);
        self.analysis = None;
        self.settings = None;
        Outcome::Applied
    }

    /// Returns to the project dashboard: no project is active.
    pub fn clear_active(&mut self) {
        self.active_id = None;
    }

    /// Starts a fresh campaign flow seeded with the active project's brand.
    pub fn begin_new_campaign(&mut self) -> Outcome {
        let Some(project) = self.active_project() else {
            return Outcome::Skipped(SkipReason::NoActiveProject);
        };
        self.campaign_input = Some(project.brand_info.clone());
        self.analysis = None;
        self.settings = None;
        Outcome::Applied
    }

    // --- Campaign flow ---

    /// Analyzes the campaign input into a strategy suggestion.
    pub fn analyze(&mut self, input: BrandInput) -> ServiceResult<AnalysisReport> {
        self.ensure_configured()?;
        self.last_error = None;
        self.campaign_input = Some(input.clone());

        match self.call_provider(|provider| provider.analyze(&input)) {
            Ok(report) => {
                self.analysis = Some(report.clone());
                Ok(report)
            }
            Err(err) => Err(self.record_failure(ANALYZE_FAILURE, err)),
        }
    }

    /// Generates a batch of posts and prepends it to the active project.
    pub fn generate(&mut self, settings: GenerationSettings) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(active) = self.active_id else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let (Some(input), Some(analysis)) = (self.campaign_input.clone(), self.analysis.clone())
        else {
            return Ok(Outcome::Skipped(SkipReason::NoAnalysis));
        };

        self.last_error = None;
        self.settings = Some(settings.clone());

        match self.call_provider(|provider| {
            provider.generate_posts(&input, &settings, &analysis.suggested_ctas)
        }) {
            Ok(drafts) => {
                let posts: Vec<Post> = drafts
                    .into_iter()
                    .map(|draft| Post::from_draft(draft, &settings, &analysis.suggested_ctas))
                    .collect();
                info!(
                    "event=generate module=service status=ok project_id={active} post_count={}",
                    posts.len()
                );
                Ok(self.apply_active(SkipReason::NoActiveProject, |project| {
                    MutationOutcome::Applied(mutation::ingest_generated(project, posts))
                }))
            }
            Err(err) => Err(self.record_failure(GENERATE_FAILURE, err)),
        }
    }

    /// Regenerates one post's content under the same id.
    pub fn regenerate_post(
        &mut self,
        post_id: PostId,
        instruction: &str,
    ) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(settings) = self.settings.clone() else {
            return Ok(Outcome::Skipped(SkipReason::NoSettings));
        };
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id).cloned() else {
            return Ok(self.skip_missing_post(ActionKind::Regenerate, post_id));
        };
        let brand = project.brand_info.clone();

        self.last_error = None;
        self.in_flight.begin(ActionKind::Regenerate, post_id);
        let result = self.call_provider(|provider| {
            provider.regenerate(&post, &brand, instruction, &settings.language)
        });
        self.in_flight.finish(ActionKind::Regenerate);

        match result {
            Ok(new_content) => Ok(self.apply_active(
                SkipReason::PostNotFound(post_id),
                |project| mutation::apply_regenerated(project, post_id, &new_content),
            )),
            Err(err) => Err(self.record_failure(ActionKind::Regenerate.failure_message(), err)),
        }
    }

    /// Generates a structured caption for one post.
    pub fn generate_caption(&mut self, post_id: PostId) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(settings) = self.settings.clone() else {
            return Ok(Outcome::Skipped(SkipReason::NoSettings));
        };
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::Caption, post_id));
        };
        let content = post.content.clone();
        let brand = project.brand_info.clone();

        self.in_flight.begin(ActionKind::Caption, post_id);
        let result = self.call_provider(|provider| {
            provider.generate_caption(&content, &brand, &settings.language)
        });
        self.in_flight.finish(ActionKind::Caption);

        match result {
            Ok(caption) => Ok(self.apply_active(SkipReason::PostNotFound(post_id), |project| {
                mutation::apply_caption(project, post_id, caption)
            })),
            Err(err) => Err(self.record_failure(ActionKind::Caption.failure_message(), err)),
        }
    }

    /// Refines one post's existing caption following an instruction.
    pub fn refine_caption(&mut self, post_id: PostId, instruction: &str) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(settings) = self.settings.clone() else {
            return Ok(Outcome::Skipped(SkipReason::NoSettings));
        };
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::RefineCaption, post_id));
        };
        let Some(current) = post.caption.clone() else {
            debug!("event=action_skip module=service action=refine_caption post_id={post_id} reason=no_caption");
            return Ok(Outcome::Skipped(SkipReason::CaptionMissing(post_id)));
        };
        let content = post.content.clone();
        let brand = project.brand_info.clone();

        self.in_flight.begin(ActionKind::RefineCaption, post_id);
        let result = self.call_provider(|provider| {
            provider.refine_caption(&content, &current, instruction, &brand, &settings.language)
        });
        self.in_flight.finish(ActionKind::RefineCaption);

        match result {
            Ok(caption) => Ok(self.apply_active(SkipReason::PostNotFound(post_id), |project| {
                mutation::apply_refined_caption(project, post_id, caption)
            })),
            Err(err) => Err(self.record_failure(ActionKind::RefineCaption.failure_message(), err)),
        }
    }

    /// Shortens one post's content in place.
    pub fn shorten_post(&mut self, post_id: PostId) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::Shorten, post_id));
        };
        let content = post.content.clone();

        self.in_flight.begin(ActionKind::Shorten, post_id);
        let result = self.call_provider(|provider| provider.shorten(&content));
        self.in_flight.finish(ActionKind::Shorten);

        match result {
            Ok(shortened) => Ok(self.apply_active(SkipReason::PostNotFound(post_id), |project| {
                mutation::apply_shortened(project, post_id, shortened)
            })),
            Err(err) => Err(self.record_failure(ActionKind::Shorten.failure_message(), err)),
        }
    }

    /// Generates a visual suggestion reference for one post.
    pub fn generate_visual_suggestion(&mut self, post_id: PostId) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::Visual, post_id));
        };
        let content = post.content.clone();

        self.in_flight.begin(ActionKind::Visual, post_id);
        let result = self.call_provider(|provider| provider.visual_suggestion(&content));
        self.in_flight.finish(ActionKind::Visual);

        match result {
            Ok(url) => Ok(self.apply_active(SkipReason::PostNotFound(post_id), |project| {
                mutation::apply_visual_suggestion(project, post_id, url)
            })),
            Err(err) => Err(self.record_failure(ActionKind::Visual.failure_message(), err)),
        }
    }

    /// Generates per-platform variations for one post.
    pub fn generate_variations(&mut self, post_id: PostId) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(settings) = self.settings.clone() else {
            return Ok(Outcome::Skipped(SkipReason::NoSettings));
        };
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::Variations, post_id));
        };
        let content = post.content.clone();

        self.in_flight.begin(ActionKind::Variations, post_id);
        let result =
            self.call_provider(|provider| provider.variations(&content, &settings.language));
        self.in_flight.finish(ActionKind::Variations);

        match result {
            Ok(variations) => Ok(self.apply_active(
                SkipReason::PostNotFound(post_id),
                |project| mutation::apply_variations(project, post_id, variations),
            )),
            Err(err) => Err(self.record_failure(ActionKind::Variations.failure_message(), err)),
        }
    }

    /// Predicts engagement for one post.
    pub fn predict_engagement(&mut self, post_id: PostId) -> ServiceResult<Outcome> {
        self.ensure_configured()?;
        let Some(project) = self.active_project() else {
            return Ok(Outcome::Skipped(SkipReason::NoActiveProject));
        };
        let Some(post) = project.find_post(post_id) else {
            return Ok(self.skip_missing_post(ActionKind::Prediction, post_id));
        };
        let content = post.content.clone();

        self.in_flight.begin(ActionKind::Prediction, post_id);
        let result = self.call_provider(|provider| provider.predict_engagement(&content));
        self.in_flight.finish(ActionKind::Prediction);

        match result {
            Ok(prediction) => Ok(self.apply_active(
                SkipReason::PostNotFound(post_id),
                |project| mutation::apply_prediction(project, post_id, prediction),
            )),
            Err(err) => Err(self.record_failure(ActionKind::Prediction.failure_message(), err)),
        }
    }

    // --- Calendar actions ---

    /// Marks a post as eligible for the calendar. Monotonic.
    pub fn save_for_calendar(&mut self, post_id: PostId) -> Outcome {
        self.apply_active(SkipReason::PostNotFound(post_id), |project| {
            mutation::mark_saved(project, post_id)
        })
    }

    /// Places a working-set post onto a day.
    pub fn schedule_post(&mut self, post_id: PostId, date: DateKey) -> Outcome {
        self.apply_active(SkipReason::PostNotFound(post_id), move |mut project| {
            match project.find_post(post_id).cloned() {
                Some(post) => {
                    project.scheduled_posts.schedule(post, date);
                    MutationOutcome::Applied(project)
                }
                None => MutationOutcome::Skipped(project),
            }
        })
    }

    /// Removes a post from a day, returning it to the unscheduled pool.
    ///
    /// Saved state is untouched; unscheduling never unsets `is_saved`.
    pub fn unschedule_post(&mut self, post_id: PostId, date: DateKey) -> Outcome {
        self.apply_active(SkipReason::PostNotFound(post_id), move |mut project| {
            project.scheduled_posts.unschedule(post_id, date);
            MutationOutcome::Applied(project)
        })
    }

    /// Moves a post between two days.
    pub fn reschedule_post(&mut self, post_id: PostId, from: DateKey, to: DateKey) -> Outcome {
        self.apply_active(SkipReason::PostNotFound(post_id), move |mut project| {
            let found = project
                .scheduled_posts
                .posts_on(from)
                .iter()
                .find(|post| post.id == post_id)
                .cloned()
                .or_else(|| project.find_post(post_id).cloned());
            match found {
                Some(post) => {
                    project.scheduled_posts.reschedule(post, from, to);
                    MutationOutcome::Applied(project)
                }
                None => MutationOutcome::Skipped(project),
            }
        })
    }

    /// Applies the scheduling action resolved from a day-cell drop.
    pub fn handle_day_drop(&mut self, payload: &DragPayload, target: DateKey) -> Outcome {
        match drag::resolve_day_drop(payload, target) {
            DropAction::Schedule { date } => self.schedule_post(payload.post_id, date),
            DropAction::Reschedule { from, to } => {
                self.reschedule_post(payload.post_id, from, to)
            }
            DropAction::Unschedule { .. } | DropAction::Ignore => {
                Outcome::Skipped(SkipReason::DropIgnored)
            }
        }
    }

    /// Applies the scheduling action resolved from an unscheduled-pool drop.
    pub fn handle_pool_drop(&mut self, payload: &DragPayload) -> Outcome {
        match drag::resolve_pool_drop(payload) {
            DropAction::Unschedule { date } => self.unschedule_post(payload.post_id, date),
            _ => Outcome::Skipped(SkipReason::DropIgnored),
        }
    }

    /// Saved posts of the active project that are not currently scheduled.
    pub fn unscheduled_posts(&self) -> Vec<&Post> {
        let Some(project) = self.active_project() else {
            return Vec::new();
        };
        let scheduled = project.scheduled_posts.scheduled_ids();
        project
            .generated_posts
            .iter()
            .filter(|post| post.is_saved && !scheduled.contains(&post.id))
            .collect()
    }

    // --- Internals ---

    fn ensure_configured(&self) -> ServiceResult<()> {
        if self.provider.is_none() {
            return Err(ServiceError::NotConfigured);
        }
        Ok(())
    }

    fn call_provider<T>(&self, call: impl FnOnce(&P) -> ProviderResult<T>) -> ProviderResult<T> {
        match self.provider.as_ref() {
            Some(provider) => call(provider),
            None => Err(ProviderError::NotConfigured),
        }
    }

    fn record_failure(&mut self, message: &str, err: ProviderError) -> ServiceError {
        warn!("event=provider_failure module=service status=error error={err}");
        self.last_error = Some(message.to_string());
        ServiceError::Provider(err)
    }

    fn skip_missing_post(&self, kind: ActionKind, post_id: PostId) -> Outcome {
        debug!("event=action_skip module=service action={kind} post_id={post_id} reason=post_not_found");
        Outcome::Skipped(SkipReason::PostNotFound(post_id))
    }

    /// Applies a mutator to the active project and persists when applied.
    fn apply_active<F>(&mut self, skip: SkipReason, mutator: F) -> Outcome
    where
        F: FnOnce(Project) -> MutationOutcome,
    {
        let Some(active) = self.active_id else {
            return Outcome::Skipped(SkipReason::NoActiveProject);
        };

        let mut applied = false;
        let projects = std::mem::take(&mut self.projects);
        self.projects = mutation::apply_to_project(projects, active, |project| {
            match mutator(project) {
                MutationOutcome::Applied(project) => {
                    applied = true;
                    project
                }
                MutationOutcome::Skipped(project) => project,
            }
        });

        if applied {
            self.persist();
            Outcome::Applied
        } else {
            Outcome::Skipped(skip)
        }
    }

    /// Fire-and-forget snapshot write; failures are logged, not surfaced.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.projects) {
            error!("event=snapshot_save module=service status=error error={err}");
        }
    }
}
