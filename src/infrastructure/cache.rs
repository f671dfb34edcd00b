//! Session-scoped record cache

use crate::domain::Record;
use crate::error::ArchiveError;
use crate::infrastructure::source::RecordSource;
use std::sync::Arc;

/// Holds one immutable snapshot of records for the lifetime of a session.
///
/// The source is read on first access only. A failed read is remembered
/// and the session carries on with an empty snapshot.
pub struct ArchiveSession<S: RecordSource> {
    source: S,
    snapshot: Option<Arc<[Record]>>,
    last_error: Option<ArchiveError>,
}

impl<S: RecordSource> ArchiveSession<S> {
    pub fn new(source: S) -> Self {
        ArchiveSession {
            source,
            snapshot: None,
            last_error: None,
        }
    }

    /// Records of this session, loading them on first call
    pub fn records(&mut self) -> Arc<[Record]> {
        if let Some(snapshot) = &self.snapshot {
            log::debug!("Using cached records ({})", snapshot.len());
            return Arc::clone(snapshot);
        }

        let snapshot: Arc<[Record]> = match self.source.load() {
            Ok(records) => {
                self.last_error = None;
                records.into()
            }
            Err(e) => {
                log::warn!(
                    "Could not load {}: {}; continuing with an empty archive",
                    self.source.location().display(),
                    e
                );
                self.last_error = Some(e);
                Vec::new().into()
            }
        };

        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Drop the snapshot and read the source again
    pub fn reload(&mut self) -> Arc<[Record]> {
        log::debug!("Reloading records from {}", self.source.location().display());
        self.snapshot = None;
        self.records()
    }

    /// Error from the most recent load, if it failed
    pub fn last_error(&self) -> Option<&ArchiveError> {
        self.last_error.as_ref()
    }

    /// Take the load error out of the session, e.g. to report it once
    pub fn take_error(&mut self) -> Option<ArchiveError> {
        self.last_error.take()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
