pub mod analysis;
pub mod intent;
pub mod metrics;
pub mod utterance;

pub use analysis::*;
pub use intent::*;
pub use metrics::*;
pub use utterance::*;
