use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::handlers::{auth, health, home, progress, routine, train};
use crate::session::SessionHandle;

pub fn create_router(
    auth_state: auth::AuthState,
    train_state: train::TrainState,
    routine_state: routine::RoutineState,
    progress_state: progress::ProgressState,
    session: SessionHandle,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Mode selection
        .route("/", get(home::index))
        .route("/mode", post(home::select_mode))
        // Auth routes
        .route(
            "/auth/login",
            get(auth::login_page).post(auth::login_submit),
        )
        .route("/auth/register", post(auth::register_submit))
        .route("/auth/logout", post(auth::logout))
        .with_state(auth_state)
        // Train routes
        .route("/train", get(train::index))
        .route("/train/sets", post(train::save_set))
        .route("/train/rest", get(train::rest))
        .route("/train/rest/cancel", post(train::cancel_rest))
        .with_state(train_state)
        // Routine editor routes
        .route("/routine", get(routine::index))
        .route("/routine/exercises", post(routine::add_exercise))
        .route("/routine/exercises/remove", post(routine::remove_exercise))
        .with_state(routine_state)
        // Progress routes
        .route("/progress", get(progress::index))
        .route("/progress/series", get(progress::series))
        .with_state(progress_state)
        // Current session via Extension layer
        .layer(Extension(session))
}
