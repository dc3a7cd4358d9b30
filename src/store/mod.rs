pub mod memory;

pub use memory::*;

use crate::models::{AnalysisRecord, AnalysisSummary};

/// Persistence seam for analysis records.
///
/// The analyzer never assumes a particular backing store; callers inject
/// whichever implementation fits their deployment.
pub trait AnalysisStore: Send + Sync {
    /// Persist a record
    fn save(&self, record: AnalysisRecord);

    /// Most recent records first, trimmed to list projections
    fn list(&self, limit: usize) -> Vec<AnalysisSummary>;

    /// Look up a full record by id
    fn get(&self, id: &str) -> Option<AnalysisRecord>;
}
