use axum::{response::Redirect, Extension, Form};
use serde::Deserialize;

use crate::middleware::AuthUser;
use crate::session::{Mode, SessionHandle};

#[derive(Debug, Deserialize)]
pub struct ModeForm {
    pub mode: String,
}

/// Send the visitor to whatever they were doing last, or to the login form.
pub async fn index(Extension(session): Extension<SessionHandle>) -> Redirect {
    match session.mode() {
        Some(mode) => Redirect::to(mode.path()),
        None => Redirect::to("/auth/login"),
    }
}

pub async fn select_mode(
    Extension(session): Extension<SessionHandle>,
    auth_user: AuthUser,
    Form(form): Form<ModeForm>,
) -> Redirect {
    let mode = Mode::parse(&form.mode);
    session.set_mode(mode);
    tracing::debug!("{} switched to {}", auth_user.username, mode.as_str());

    Redirect::to(mode.path())
}
