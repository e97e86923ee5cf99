use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{ProgressPoint, SetLog};
use crate::repositories::LogRepository;

#[derive(Clone)]
pub struct ProgressState {
    pub log_repo: LogRepository,
}

#[derive(Template)]
#[template(path = "progress/index.html")]
struct ProgressTemplate {
    user: AuthUser,
    history: Vec<SetLog>,
    exercises: Vec<String>,
    exercise: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub exercise: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub exercise: String,
}

pub async fn index(
    State(state): State<ProgressState>,
    auth_user: AuthUser,
    Query(query): Query<ProgressQuery>,
) -> Result<Response> {
    let history = state.log_repo.history(&auth_user.username).await?;
    let exercises = state.log_repo.exercises_logged(&auth_user.username).await?;
    let exercise = query
        .exercise
        .filter(|e| exercises.contains(e))
        .or_else(|| exercises.first().cloned())
        .unwrap_or_default();

    let template = ProgressTemplate {
        user: auth_user,
        history,
        exercises,
        exercise,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

/// Chart data for one exercise, oldest first.
pub async fn series(
    State(state): State<ProgressState>,
    auth_user: AuthUser,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<ProgressPoint>>> {
    let points = state
        .log_repo
        .history_for_exercise(&auth_user.username, &query.exercise)
        .await?;

    Ok(Json(points))
}
