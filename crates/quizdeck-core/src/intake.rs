//! File intake: turning a user's file selection into an [`UploadedFile`].
//!
//! Reads are asynchronous and may overlap with a later selection. Every
//! selection bumps a generation counter; a completed read is applied only if
//! its ticket still carries the current generation (last selection wins).

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::IntakeError;
use crate::model::UploadedFile;

/// A pending read for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTicket {
    generation: u64,
    path: PathBuf,
}

impl ReadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the selected file as UTF-8 text.
    pub async fn read(&self) -> Result<UploadedFile, IntakeError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| IntakeError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let raw_text = String::from_utf8(bytes)
            .map_err(|_| IntakeError::NotUtf8(self.path.display().to_string()))?;
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(UploadedFile { name, raw_text })
    }
}

/// Holds the currently selected file, if any.
#[derive(Debug, Default)]
pub struct FileIntake {
    generation: u64,
    current: Option<UploadedFile>,
    pending: bool,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file (or deselect with `None`).
    ///
    /// Drops the previously active file immediately. Returns a ticket for the
    /// read that must follow a selection.
    pub fn select(&mut self, path: Option<&Path>) -> Option<ReadTicket> {
        self.generation += 1;
        self.current = None;
        self.pending = path.is_some();
        debug!(generation = self.generation, path = ?path, "file selection changed");
        path.map(|p| ReadTicket {
            generation: self.generation,
            path: p.to_path_buf(),
        })
    }

    /// Select a file whose contents are already in memory.
    pub fn select_in_memory(&mut self, file: UploadedFile) {
        self.generation += 1;
        self.pending = false;
        debug!(generation = self.generation, name = %file.name, "in-memory file selected");
        self.current = Some(file);
    }

    /// Apply a finished read.
    ///
    /// Returns `Ok(false)` when the ticket is stale and the read was discarded.
    pub fn complete(
        &mut self,
        ticket: &ReadTicket,
        read: Result<UploadedFile, IntakeError>,
    ) -> Result<bool, IntakeError> {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale file read"
            );
            return Ok(false);
        }
        self.pending = false;
        let file = read?;
        debug!(name = %file.name, bytes = file.raw_text.len(), "file read");
        self.current = Some(file);
        Ok(true)
    }

    pub fn current(&self) -> Option<&UploadedFile> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` while a selected file's read has not completed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
