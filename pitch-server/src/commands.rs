use crate::state::AppState;
use pitch_registry::{clean_draft, clean_links, validate_draft, PitchDraftV1};
use project_store::contribute::{begin_contribution, ContributionRequest, ContributionStatus};
use project_store::{NewProject, Project, ProjectPage, ProjectQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Storage(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(flatten)]
    pub project: Project,
    /// http(s) links only, cleaned of tracking parameters.
    pub safe_links: Vec<String>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        let safe_links = clean_links(&project.links);
        Self {
            project,
            safe_links,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContributionDto {
    pub project_id: String,
    pub status: ContributionStatus,
    pub message: String,
}

impl ContributionDto {
    pub fn new(project_id: String, status: ContributionStatus) -> Self {
        let message = status.message();
        Self {
            project_id,
            status,
            message,
        }
    }
}

pub fn list_projects(state: &AppState, query: &ProjectQuery) -> Result<ProjectPage, CommandError> {
    let store = state.store.lock().map_err(|_| poisoned())?;
    Ok(store.query(query))
}

pub fn get_project(state: &AppState, id: &str) -> Result<ProjectDto, CommandError> {
    let store = state.store.lock().map_err(|_| poisoned())?;
    store
        .get(id)
        .cloned()
        .map(ProjectDto::from)
        .ok_or(CommandError::NotFound)
}

pub fn create_project(state: &AppState, draft: PitchDraftV1) -> Result<ProjectDto, CommandError> {
    let draft = clean_draft(draft);
    validate_draft(&draft, &state.rules).map_err(|e| CommandError::Invalid(e.to_string()))?;

    let mut store = state.store.lock().map_err(|_| poisoned())?;
    let id = store
        .add(NewProject::from(draft))
        .map_err(|e| CommandError::Storage(e.to_string()))?;
    tracing::info!(%id, "project created");

    store
        .get(&id)
        .cloned()
        .map(ProjectDto::from)
        .ok_or(CommandError::NotFound)
}

/// Checks the project exists and starts the mock flow. Settling is left to
/// the caller so no lock is held across the delay.
pub fn start_contribution(
    state: &AppState,
    id: &str,
    request: &ContributionRequest,
) -> Result<ContributionStatus, CommandError> {
    let store = state.store.lock().map_err(|_| poisoned())?;
    if store.get(id).is_none() {
        return Err(CommandError::NotFound);
    }
    drop(store);

    let status = begin_contribution(request);
    if status.is_rejected() {
        return Err(CommandError::Invalid(status.message()));
    }
    Ok(status)
}

fn poisoned() -> CommandError {
    CommandError::Storage("project store lock poisoned".into())
}
