use std::collections::BTreeSet;

use crate::error::{AppError, Result};
use crate::models::{ProgressPoint, SetLog};
use crate::storage::StoreRef;

#[derive(Clone)]
pub struct LogRepository {
    store: StoreRef<SetLog>,
}

impl LogRepository {
    pub fn new(store: StoreRef<SetLog>) -> Self {
        Self { store }
    }

    /// Validate and append one performed set. Logged sets are never changed.
    pub async fn append_set(&self, log: SetLog) -> Result<SetLog> {
        log.validate()?;

        let store = self.store.clone();
        let row = log.clone();
        tokio::task::spawn_blocking(move || {
            store.modify(|logs| {
                logs.push(row);
                Ok(())
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::debug!(
            "Logged set {} of {} for {}",
            log.set_number,
            log.exercise,
            log.username
        );
        Ok(log)
    }

    /// All of the user's sets, newest date first.
    pub async fn history(&self, username: &str) -> Result<Vec<SetLog>> {
        let mut logs = self.user_logs(username).await?;
        // Stable sort keeps insertion order within a date
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(logs)
    }

    /// Weight over time for one exercise, oldest date first.
    pub async fn history_for_exercise(
        &self,
        username: &str,
        exercise: &str,
    ) -> Result<Vec<ProgressPoint>> {
        let mut logs: Vec<SetLog> = self
            .user_logs(username)
            .await?
            .into_iter()
            .filter(|log| log.exercise == exercise)
            .collect();
        logs.sort_by_key(|log| log.date);
        Ok(logs.iter().map(ProgressPoint::from).collect())
    }

    /// Names of every exercise the user has logged, sorted.
    pub async fn exercises_logged(&self, username: &str) -> Result<Vec<String>> {
        let names: BTreeSet<String> = self
            .user_logs(username)
            .await?
            .into_iter()
            .map(|log| log.exercise)
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn user_logs(&self, username: &str) -> Result<Vec<SetLog>> {
        let store = self.store.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let logs: Vec<SetLog> = store
                .load()?
                .into_iter()
                .filter(|log| log.username == username)
                .collect();
            Ok(logs)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
