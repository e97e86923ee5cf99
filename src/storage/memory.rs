use std::sync::Mutex;

use super::Table;
use crate::error::{AppError, Result};

/// Table kept in process memory, used by tests and throwaway instances.
pub struct MemoryTable<R> {
    rows: Mutex<Vec<R>>,
}

impl<R> MemoryTable<R> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl<R> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send> Table<R> for MemoryTable<R> {
    fn load(&self) -> Result<Vec<R>> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| AppError::Internal("memory table poisoned".to_string()))?;
        Ok(rows.clone())
    }

    fn save(&self, rows: &[R]) -> Result<()> {
        let mut stored = self
            .rows
            .lock()
            .map_err(|_| AppError::Internal("memory table poisoned".to_string()))?;
        *stored = rows.to_vec();
        Ok(())
    }
}
