use std::fs::{self, File};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use super::Table;
use crate::error::Result;
use crate::models::TableRow;

/// Table stored as a comma-separated file with a header row.
pub struct CsvTable<R> {
    path: PathBuf,
    _row: PhantomData<fn() -> R>,
}

impl<R> CsvTable<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _row: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<R: TableRow> Table<R> for CsvTable<R> {
    fn load(&self) -> Result<Vec<R>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<R>, csv::Error>>()?;
        Ok(rows)
    }

    fn save(&self, rows: &[R]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write beside the target and rename so readers never see half a table
        let temp = self.temp_path();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&temp)?;
            writer.write_record(R::HEADERS)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}
