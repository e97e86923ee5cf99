//! In-memory login state for the running instance.
//!
//! One user is logged in at a time. Logging out, or restarting the process,
//! discards the context along with the selected mode.

use std::sync::{Arc, PoisonError, RwLock};

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Train,
    Routine,
    Progress,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Train, Mode::Routine, Mode::Progress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Routine => "routine",
            Mode::Progress => "progress",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "routine" => Mode::Routine,
            "progress" => Mode::Progress,
            _ => Mode::Train,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Mode::Train => "/train",
            Mode::Routine => "/routine",
            Mode::Progress => "/progress",
        }
    }
}

#[derive(Debug)]
struct Session {
    username: String,
    mode: Mode,
    rest_timer: Option<CancellationToken>,
}

/// Shared handle to the current session, cloned into every request.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `username`, replacing whoever was logged in.
    pub fn login(&self, username: &str) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            cancel_timer(previous.rest_timer);
        }
        *slot = Some(Session {
            username: username.to_string(),
            mode: Mode::default(),
            rest_timer: None,
        });
        tracing::info!("{} logged in", username);
    }

    pub fn logout(&self) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(session) = slot.take() {
            cancel_timer(session.rest_timer);
            tracing::info!("{} logged out", session.username);
        }
    }

    pub fn current_user(&self) -> Option<String> {
        let slot = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|s| s.username.clone())
    }

    pub fn snapshot(&self) -> Option<(String, Mode)> {
        let slot = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|s| (s.username.clone(), s.mode))
    }

    pub fn mode(&self) -> Option<Mode> {
        self.snapshot().map(|(_, mode)| mode)
    }

    /// Switch mode. Returns `false` when nobody is logged in.
    pub fn set_mode(&self, mode: Mode) -> bool {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_mut() {
            Some(session) => {
                session.mode = mode;
                true
            }
            None => false,
        }
    }

    /// Track a new rest countdown, cancelling the one already running.
    pub fn replace_rest_timer(&self, token: CancellationToken) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_mut() {
            Some(session) => cancel_timer(session.rest_timer.replace(token)),
            None => token.cancel(),
        }
    }

    /// Cancel the running rest countdown. Returns `false` if there was none.
    pub fn cancel_rest_timer(&self) -> bool {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_mut().and_then(|s| s.rest_timer.take()) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

fn cancel_timer(token: Option<CancellationToken>) {
    if let Some(token) = token {
        token.cancel();
    }
}
