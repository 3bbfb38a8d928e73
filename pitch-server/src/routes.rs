use crate::commands::{self, CommandError, ContributionDto, ProjectDto};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pitch_registry::PitchDraftV1;
use project_store::contribute::{settle, ContributionRequest, MOCK_SETTLE_DELAY};
use project_store::{ProjectPage, ProjectQuery};

pub fn project_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/projects", get(handle_list).post(handle_create))
        .route("/v1/projects/:id", get(handle_get))
        .route("/v1/projects/:id/contribute", post(handle_contribute))
        .fallback(handle_fallback)
        .with_state(state)
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = match &self {
            CommandError::Invalid(_) => StatusCode::BAD_REQUEST,
            CommandError::NotFound => StatusCode::NOT_FOUND,
            CommandError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

// Extractor failures answer with the same `{"detail": ...}` body as the rest.
impl From<JsonRejection> for CommandError {
    fn from(rejection: JsonRejection) -> Self {
        CommandError::Invalid(rejection.body_text())
    }
}

impl From<QueryRejection> for CommandError {
    fn from(rejection: QueryRejection) -> Self {
        CommandError::Invalid(rejection.body_text())
    }
}

async fn handle_list(
    State(state): State<AppState>,
    query: Result<Query<ProjectQuery>, QueryRejection>,
) -> Result<Json<ProjectPage>, CommandError> {
    let Query(query) = query?;
    commands::list_projects(&state, &query).map(Json)
}

async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDto>, CommandError> {
    commands::get_project(&state, &id).map(Json)
}

async fn handle_create(
    State(state): State<AppState>,
    draft: Result<Json<PitchDraftV1>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectDto>), CommandError> {
    let Json(draft) = draft?;
    commands::create_project(&state, draft).map(|p| (StatusCode::CREATED, Json(p)))
}

async fn handle_contribute(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<ContributionRequest>, JsonRejection>,
) -> Result<Json<ContributionDto>, CommandError> {
    let Json(request) = request?;
    let preparing = commands::start_contribution(&state, &id, &request)?;
    tracing::info!(project = %id, amount = %request.amount, "mock contribution started");

    tokio::time::sleep(MOCK_SETTLE_DELAY).await;
    Ok(Json(ContributionDto::new(id, settle(preparing))))
}

async fn handle_fallback() -> Redirect {
    Redirect::temporary("/v1/projects")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use pitch_registry::DraftRules;
    use serde::de::DeserializeOwned;
    use project_store::contribute::ContributionStatus;
    use project_store::MemorySlot;

    fn state() -> AppState {
        AppState::new(Box::new(MemorySlot::new()), DraftRules::default())
    }

    async fn json_body<T: DeserializeOwned>(body: &str) -> Result<Json<T>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        Json::<T>::from_request(request, &()).await
    }

    async fn detail(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        body["detail"].as_str().unwrap_or_default().to_string()
    }

    #[test]
    fn errors_map_to_status_codes() {
        assert_eq!(
            CommandError::Invalid("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CommandError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CommandError::Storage("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn contribute_settles_after_mock_delay() {
        let state = state();
        let id = commands::list_projects(&state, &ProjectQuery::default())
            .expect("list")
            .items[0]
            .id
            .clone();

        let started = std::time::Instant::now();
        let Json(dto) = handle_contribute(
            State(state),
            Path(id.clone()),
            Ok(Json(ContributionRequest {
                amount: "5".into(),
                note: String::new(),
            })),
        )
        .await
        .expect("contribute");

        assert!(started.elapsed() >= MOCK_SETTLE_DELAY);
        assert_eq!(dto.project_id, id);
        assert_eq!(dto.status, ContributionStatus::Succeeded { amount: 5.0 });
        assert!(dto.message.starts_with("Success! (mock)"));
    }

    #[tokio::test]
    async fn get_unknown_project_is_404() {
        let response = handle_get(State(state()), Path("missing".into()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_returns_201() {
        let draft = PitchDraftV1 {
            schema: pitch_registry::DRAFT_SCHEMA.into(),
            name: "Test".into(),
            category: "X".into(),
            purpose: "Y".into(),
            problem: "P".into(),
            solution: "S".into(),
            target_market: "T".into(),
            business_model: "B".into(),
            team: "Team".into(),
            contact: "c".into(),
            ..PitchDraftV1::default()
        };
        let response = handle_create(State(state()), Ok(Json(draft))).await.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn unknown_paths_redirect_home() {
        let response = handle_fallback().await.into_response();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/v1/projects");
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_400_naming_the_field() {
        let body = json_body::<PitchDraftV1>(r#"{"name":"x","category":"c"}"#).await;
        let response = handle_create(State(state()), body).await.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(detail(response).await, "purpose is required");
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_400_with_detail() {
        let body = json_body::<PitchDraftV1>("{\"name\":").await;
        assert!(body.is_err());
        let response = handle_create(State(state()), body).await.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!detail(response).await.is_empty());
    }

    #[tokio::test]
    async fn contribute_without_amount_is_400() {
        let state = state();
        let id = commands::list_projects(&state, &ProjectQuery::default())
            .expect("list")
            .items[0]
            .id
            .clone();

        let body = json_body::<ContributionRequest>("{}").await;
        let response = handle_contribute(State(state), Path(id), body)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(detail(response).await, "Enter an amount in ALGO.");
    }
}
