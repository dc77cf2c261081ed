use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use living_legacy::error::AppError;
use living_legacy::legacy::{
    CategorySelection, LegacyArchetype, LegacyCatalog, ProjectRecord, ProjectScope, ProjectStore,
    QuestionSelector, ScopingSession,
};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) archetype: String,
    pub(crate) category_count: usize,
    pub(crate) question_count: usize,
    pub(crate) categories: CategorySelection,
}

impl QuestionsResponse {
    fn new(archetype: String, categories: CategorySelection) -> Self {
        Self {
            archetype,
            category_count: categories.len(),
            question_count: categories.total_questions(),
            categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectResponse {
    pub(crate) project: ProjectRecord,
    pub(crate) file_name: String,
    pub(crate) questions: QuestionsResponse,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/catalog/archetypes/:name", get(archetype_endpoint))
        .route("/api/v1/questions", post(questions_endpoint))
        .route("/api/v1/projects", post(create_project_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<&'static LegacyCatalog> {
    Json(LegacyCatalog::shared())
}

pub(crate) async fn archetype_endpoint(
    Path(name): Path<String>,
) -> Result<Json<&'static LegacyArchetype>, AppError> {
    Ok(Json(LegacyCatalog::shared().get_archetype(&name)?))
}

/// Never fails for a well-formed body: unknown archetypes yield only the
/// closing category.
pub(crate) async fn questions_endpoint(Json(scope): Json<ProjectScope>) -> Json<QuestionsResponse> {
    let categories = QuestionSelector::standard().select(&scope);
    Json(QuestionsResponse::new(scope.archetype, categories))
}

pub(crate) async fn create_project_endpoint(
    Extension(state): Extension<AppState>,
    Json(session): Json<ScopingSession>,
) -> Result<(StatusCode, Json<ProjectResponse>), AppError> {
    let record = ProjectRecord::build(
        LegacyCatalog::shared(),
        &session,
        Local::now().naive_local(),
    )?;
    let store = state.projects.clone();
    let to_save = record.clone();
    let path = tokio::task::spawn_blocking(move || store.save(&to_save))
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err)))??;
    info!(project_id = %record.project_id, path = %path.display(), "project created over http");

    let categories = QuestionSelector::standard().select(&session.scope());
    let questions = QuestionsResponse::new(record.legacy_type.clone(), categories);

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            file_name: ProjectStore::file_name(&record),
            project: record,
            questions,
        }),
    ))
}
