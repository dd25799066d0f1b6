use crate::error::ControllerError;
use crate::shared_data::StatusRecord;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Appends status rows to a CSV file. The header is written only when the file is empty.
#[derive(Debug, Clone)]
pub struct TelemetryRecorder {
    path: PathBuf,
}

impl TelemetryRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, record: &StatusRecord) -> Result<(), ControllerError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;
        Ok(())
    }

    /// Records a row, logging instead of failing so the control loop keeps running.
    pub fn record_or_warn(&self, record: &StatusRecord) {
        if let Err(e) = self.record(record) {
            log::warn!("Error logging status to {}: {}", self.path.display(), e);
        }
    }

    pub fn read_all(&self) -> Result<Vec<StatusRecord>, ControllerError> {
        let file = File::open(&self.path)?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }
}
