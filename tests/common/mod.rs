#![allow(dead_code)]

use axum::Router;

use rutina::handlers::{auth, progress, routine, train};
use rutina::models::{Account, RoutineEntry, SetLog};
use rutina::repositories::{AccountRepository, LogRepository, RoutineRepository};
use rutina::session::SessionHandle;
use rutina::storage::{MemoryTable, Store, StoreRef};

pub struct TestApp {
    pub router: Router,
    pub session: SessionHandle,
    pub accounts: StoreRef<Account>,
    pub routines: StoreRef<RoutineEntry>,
    pub logs: StoreRef<SetLog>,
}

impl TestApp {
    pub fn account_repo(&self) -> AccountRepository {
        AccountRepository::new(self.accounts.clone())
    }

    pub fn routine_repo(&self) -> RoutineRepository {
        RoutineRepository::new(self.routines.clone())
    }

    pub fn log_repo(&self) -> LogRepository {
        LogRepository::new(self.logs.clone())
    }
}

pub fn create_test_app() -> TestApp {
    let accounts = Store::new(MemoryTable::new());
    let routines = Store::new(MemoryTable::new());
    let logs = Store::new(MemoryTable::new());
    let session = SessionHandle::new();

    let account_repo = AccountRepository::new(accounts.clone());
    let routine_repo = RoutineRepository::new(routines.clone());
    let log_repo = LogRepository::new(logs.clone());

    let auth_state = auth::AuthState {
        account_repo,
        routine_repo: routine_repo.clone(),
    };
    let train_state = train::TrainState {
        routine_repo: routine_repo.clone(),
        log_repo: log_repo.clone(),
    };
    let routine_state = routine::RoutineState { routine_repo };
    let progress_state = progress::ProgressState { log_repo };

    let router = rutina::routes::create_router(
        auth_state,
        train_state,
        routine_state,
        progress_state,
        session.clone(),
    );

    TestApp {
        router,
        session,
        accounts,
        routines,
        logs,
    }
}

/// Register `username`, seed their routine and log them in.
pub async fn login_test_user(app: &TestApp, username: &str) {
    app.account_repo()
        .register(username, "password123")
        .await
        .unwrap();
    app.routine_repo().ensure_seeded(username).await.unwrap();
    app.session.login(username);
}
