//! Flat-table persistence.
//!
//! Every table is read in full, changed in memory and written back in full.
//! [`Table`] is the backend seam; [`Store`] adds the in-process write guard
//! that keeps concurrent read-modify-write cycles from dropping rows.

pub mod csv_table;
pub mod memory;

use std::sync::{Arc, Mutex};

use crate::error::{AppError, Result};
use crate::models::TableRow;

pub use csv_table::CsvTable;
pub use memory::MemoryTable;

pub trait Table<R>: Send + Sync {
    /// Read every row. A table that was never written is empty.
    fn load(&self) -> Result<Vec<R>>;

    /// Replace the table contents with `rows`.
    fn save(&self, rows: &[R]) -> Result<()>;
}

pub type StoreRef<R> = Arc<Store<R>>;

pub struct Store<R> {
    table: Box<dyn Table<R>>,
    write_guard: Mutex<()>,
}

impl<R: TableRow> Store<R> {
    pub fn new(table: impl Table<R> + 'static) -> StoreRef<R> {
        Arc::new(Self {
            table: Box::new(table),
            write_guard: Mutex::new(()),
        })
    }

    pub fn load(&self) -> Result<Vec<R>> {
        self.table.load()
    }

    /// Run `f` over the loaded rows and persist the result.
    ///
    /// Rows are only ever appended or removed, so the table is rewritten
    /// only when the row count changed. Nothing is written when `f` fails.
    pub fn modify<T>(&self, f: impl FnOnce(&mut Vec<R>) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_guard
            .lock()
            .map_err(|_| AppError::Internal("table write guard poisoned".to_string()))?;

        let mut rows = self.table.load()?;
        let before = rows.len();
        let output = f(&mut rows)?;

        if rows.len() != before {
            self.table.save(&rows)?;
        }

        Ok(output)
    }
}
