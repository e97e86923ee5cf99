use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::RoutineExerciseForm;
use crate::repositories::RoutineRepository;

#[derive(Clone)]
pub struct RoutineState {
    pub routine_repo: RoutineRepository,
}

#[derive(Template)]
#[template(path = "routine/index.html")]
struct RoutineTemplate {
    user: AuthUser,
    days: Vec<String>,
    day: String,
    exercises: Vec<String>,
    notice: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoutineQuery {
    pub day: Option<String>,
}

async fn render_routine(
    state: &RoutineState,
    user: AuthUser,
    day: Option<String>,
    notice: Option<String>,
    error: Option<String>,
) -> Result<Response> {
    let days = state.routine_repo.list_days(&user.username).await?;
    let day = day
        .filter(|d| days.contains(d))
        .or_else(|| days.first().cloned())
        .unwrap_or_default();
    let exercises = state
        .routine_repo
        .list_exercises(&user.username, &day)
        .await?;

    let template = RoutineTemplate {
        user,
        days,
        day,
        exercises,
        notice,
        error,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn index(
    State(state): State<RoutineState>,
    auth_user: AuthUser,
    Query(query): Query<RoutineQuery>,
) -> Result<Response> {
    render_routine(&state, auth_user, query.day, None, None).await
}

pub async fn add_exercise(
    State(state): State<RoutineState>,
    auth_user: AuthUser,
    Form(form): Form<RoutineExerciseForm>,
) -> Result<Response> {
    let day = form.day.trim();
    let exercise = form.exercise.trim();

    if day.is_empty() || exercise.is_empty() {
        return render_routine(
            &state,
            auth_user,
            Some(day.to_string()),
            None,
            Some("Day and exercise name are required".to_string()),
        )
        .await;
    }

    state
        .routine_repo
        .add_exercise(&auth_user.username, day, exercise)
        .await?;

    let notice = format!("Added {} to {}", exercise, day);
    render_routine(&state, auth_user, Some(day.to_string()), Some(notice), None).await
}

pub async fn remove_exercise(
    State(state): State<RoutineState>,
    auth_user: AuthUser,
    Form(form): Form<RoutineExerciseForm>,
) -> Result<Response> {
    let removed = state
        .routine_repo
        .remove_exercise(&auth_user.username, &form.day, &form.exercise)
        .await?;

    let notice = match removed {
        0 => None,
        _ => Some(format!("Removed {} from {}", form.exercise, form.day)),
    };
    render_routine(&state, auth_user, Some(form.day), notice, None).await
}
