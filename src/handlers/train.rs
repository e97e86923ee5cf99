use std::convert::Infallible;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    Extension, Form,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::set_log::{
    DEFAULT_EXERTION, MAX_EXERTION, MAX_SETS_PER_EXERCISE, MIN_EXERTION, WEIGHT_STEP_LB,
};
use crate::models::CreateSetLog;
use crate::repositories::{LogRepository, RoutineRepository};
use crate::session::SessionHandle;
use crate::timer::{
    clamp_rest_seconds, RestTimer, Tick, DEFAULT_REST_SECONDS, MAX_REST_SECONDS,
    MIN_REST_SECONDS,
};

#[derive(Clone)]
pub struct TrainState {
    pub routine_repo: RoutineRepository,
    pub log_repo: LogRepository,
}

#[derive(Template)]
#[template(path = "train/index.html")]
struct TrainTemplate {
    user: AuthUser,
    days: Vec<String>,
    day: String,
    date: NaiveDate,
    rest: u32,
    min_rest: u32,
    max_rest: u32,
    exercises: Vec<String>,
    set_numbers: Vec<i32>,
    min_exertion: i32,
    max_exertion: i32,
    default_exertion: i32,
    weight_step: f64,
    notice: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrainQuery {
    pub day: Option<String>,
    pub date: Option<NaiveDate>,
    pub rest: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RestQuery {
    pub seconds: Option<u32>,
}

struct TrainView {
    day: Option<String>,
    date: NaiveDate,
    rest: u32,
    notice: Option<String>,
    error: Option<String>,
}

async fn render_train(state: &TrainState, user: AuthUser, view: TrainView) -> Result<Response> {
    let days = state.routine_repo.list_days(&user.username).await?;
    let day = view
        .day
        .filter(|d| days.contains(d))
        .or_else(|| days.first().cloned())
        .unwrap_or_default();
    let exercises = if day.is_empty() {
        Vec::new()
    } else {
        state
            .routine_repo
            .list_exercises(&user.username, &day)
            .await?
    };

    let template = TrainTemplate {
        user,
        days,
        day,
        date: view.date,
        rest: view.rest,
        min_rest: MIN_REST_SECONDS,
        max_rest: MAX_REST_SECONDS,
        exercises,
        set_numbers: (1..=MAX_SETS_PER_EXERCISE).collect(),
        min_exertion: MIN_EXERTION,
        max_exertion: MAX_EXERTION,
        default_exertion: DEFAULT_EXERTION,
        weight_step: WEIGHT_STEP_LB,
        notice: view.notice,
        error: view.error,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn index(
    State(state): State<TrainState>,
    auth_user: AuthUser,
    Query(query): Query<TrainQuery>,
) -> Result<Response> {
    let view = TrainView {
        day: query.day,
        date: query.date.unwrap_or_else(|| Local::now().date_naive()),
        rest: clamp_rest_seconds(query.rest.unwrap_or(DEFAULT_REST_SECONDS)),
        notice: None,
        error: None,
    };

    render_train(&state, auth_user, view).await
}

pub async fn save_set(
    State(state): State<TrainState>,
    auth_user: AuthUser,
    Form(form): Form<CreateSetLog>,
) -> Result<Response> {
    let mut view = TrainView {
        day: Some(form.day.clone()),
        date: form
            .parsed_date()
            .unwrap_or_else(|| Local::now().date_naive()),
        rest: clamp_rest_seconds(form.rest_seconds().unwrap_or(DEFAULT_REST_SECONDS)),
        notice: None,
        error: None,
    };

    let saved = match form.into_set_log(&auth_user.username) {
        Ok(log) => state.log_repo.append_set(log).await,
        Err(e) => Err(e),
    };
    match saved {
        Ok(log) => {
            view.notice = Some(format!(
                "Saved set {} of {}",
                log.set_number, log.exercise
            ));
        }
        Err(AppError::Validation(msg)) => view.error = Some(msg),
        Err(e) => return Err(e),
    }

    render_train(&state, auth_user, view).await
}

/// Stream a rest countdown as server-sent events.
///
/// Emits `tick` events carrying the seconds left, then a single `done` or
/// `cancelled` event.
pub async fn rest(
    Extension(session): Extension<SessionHandle>,
    auth_user: AuthUser,
    Query(query): Query<RestQuery>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let seconds = clamp_rest_seconds(query.seconds.unwrap_or(DEFAULT_REST_SECONDS));
    tracing::debug!("{} resting for {}s", auth_user.username, seconds);

    let timer = RestTimer::start(seconds);
    session.replace_rest_timer(timer.cancel_token());

    let stream = timer.into_stream().map(|tick| Ok(tick_event(tick)));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub async fn cancel_rest(
    Extension(session): Extension<SessionHandle>,
    _auth_user: AuthUser,
) -> StatusCode {
    if session.cancel_rest_timer() {
        tracing::debug!("Rest countdown cancelled");
    }
    StatusCode::NO_CONTENT
}

fn tick_event(tick: Tick) -> Event {
    match tick {
        Tick::Remaining(seconds) => Event::default().event("tick").data(seconds.to_string()),
        Tick::Finished => Event::default().event("done").data("Next set!"),
        Tick::Cancelled => Event::default().event("cancelled").data("Rest cancelled"),
    }
}
