use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};

use crate::error::{AppError, Result};
use crate::middleware::OptionalAuthUser;
use crate::models::{CreateAccount, LoginCredentials};
use crate::repositories::{AccountRepository, RoutineRepository};
use crate::session::SessionHandle;

#[derive(Clone)]
pub struct AuthState {
    pub account_repo: AccountRepository,
    pub routine_repo: RoutineRepository,
}

#[derive(Template, Default)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
    warning: Option<String>,
    notice: Option<String>,
}

fn render_login(template: LoginTemplate) -> Result<Response> {
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn login_page(OptionalAuthUser(auth_user): OptionalAuthUser) -> Result<Response> {
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    render_login(LoginTemplate::default())
}

pub async fn login_submit(
    State(state): State<AuthState>,
    Extension(session): Extension<SessionHandle>,
    Form(credentials): Form<LoginCredentials>,
) -> Result<Response> {
    let account = match state
        .account_repo
        .verify(&credentials.username, &credentials.password)
        .await
    {
        Ok(account) => account,
        Err(AppError::InvalidCredentials) => {
            tracing::debug!("Failed login for {}", credentials.username);
            return render_login(LoginTemplate {
                error: Some("Invalid username or password".to_string()),
                ..Default::default()
            });
        }
        Err(e) => return Err(e),
    };

    if state.routine_repo.ensure_seeded(&account.username).await? {
        tracing::info!("Seeded default routine for {}", account.username);
    }

    session.login(&account.username);

    Ok(Redirect::to("/").into_response())
}

pub async fn register_submit(
    State(state): State<AuthState>,
    Form(form): Form<CreateAccount>,
) -> Result<Response> {
    match state
        .account_repo
        .register(&form.username, &form.password)
        .await
    {
        Ok(account) => render_login(LoginTemplate {
            notice: Some(format!("User {} registered", account.username)),
            ..Default::default()
        }),
        Err(AppError::DuplicateUser) => render_login(LoginTemplate {
            warning: Some("That username already exists".to_string()),
            ..Default::default()
        }),
        Err(e) => Err(e),
    }
}

pub async fn logout(Extension(session): Extension<SessionHandle>) -> Response {
    session.logout();
    Redirect::to("/auth/login").into_response()
}
