use std::sync::Mutex;

use crate::models::{AnalysisRecord, AnalysisSummary};

use super::AnalysisStore;

/// In-memory analysis store, newest record first.
///
/// Suitable for a single process; anything longer-lived should implement
/// `AnalysisStore` over real persistence.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalysisStore for MemoryStore {
    fn save(&self, record: AnalysisRecord) {
        let mut records = self.records.lock().expect("store lock poisoned");
        records.insert(0, record);
    }

    fn list(&self, limit: usize) -> Vec<AnalysisSummary> {
        let records = self.records.lock().expect("store lock poisoned");
        records.iter().take(limit).map(AnalysisSummary::from).collect()
    }

    fn get(&self, id: &str) -> Option<AnalysisRecord> {
        let records = self.records.lock().expect("store lock poisoned");
        records.iter().find(|r| r.id == id).cloned()
    }
}
