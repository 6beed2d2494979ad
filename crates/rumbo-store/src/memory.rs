//! In-memory store for testing session flows without touching disk.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rumbo_core::error::StoreError;
use rumbo_core::traits::{CompletionRecord, ProgressStore, SessionState};

/// A [`ProgressStore`] backed by process memory.
///
/// Counts operations so tests can assert on persistence behavior.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<SessionState>>,
    completion: Mutex<Option<CompletionRecord>>,
    save_count: AtomicU32,
    load_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with saved session state.
    pub fn with_session(state: SessionState) -> Self {
        let store = Self::default();
        *store.session.lock().unwrap() = Some(state);
        store
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }

    /// Number of `load` calls so far.
    pub fn load_count(&self) -> u32 {
        self.load_count.load(Ordering::Relaxed)
    }
}

impl ProgressStore for MemoryStore {
    fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.session.lock().unwrap() = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionState>, StoreError> {
        self.load_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.session.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        *self.completion.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn load_completion(&self) -> Result<Option<CompletionRecord>, StoreError> {
        Ok(self.completion.lock().unwrap().clone())
    }
}
