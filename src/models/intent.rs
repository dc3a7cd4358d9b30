use serde::{Deserialize, Serialize};

/// Discrete buying-stage categories - restricted enum so model output
/// cannot introduce new labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentBucket {
    BuyNow,
    BuySoon,
    Later,
    NoFit,
}

impl IntentBucket {
    /// Canonical bucket order, used for tie-breaking the primary bucket
    pub const ORDERED: [IntentBucket; 4] = [
        IntentBucket::BuyNow,
        IntentBucket::BuySoon,
        IntentBucket::Later,
        IntentBucket::NoFit,
    ];
}

/// Raw intent distribution as produced by the model - arbitrary
/// non-negative scale, not guaranteed to sum to anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIntent {
    #[serde(default)]
    pub buy_now: f64,
    #[serde(default)]
    pub buy_soon: f64,
    #[serde(default)]
    pub later: f64,
    #[serde(default)]
    pub no_fit: f64,
}

impl RawIntent {
    pub fn total(&self) -> f64 {
        self.buy_now + self.buy_soon + self.later + self.no_fit
    }
}

/// Normalized intent distribution: four non-negative integers summing
/// to exactly 100, plus the dominant bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentScore {
    pub buy_now: u32,
    pub buy_soon: u32,
    pub later: u32,
    pub no_fit: u32,
    pub primary: IntentBucket,
}

impl IntentScore {
    pub fn total(&self) -> u32 {
        self.buy_now + self.buy_soon + self.later + self.no_fit
    }

    /// Bucket values in canonical order
    pub fn values(&self) -> [u32; 4] {
        [self.buy_now, self.buy_soon, self.later, self.no_fit]
    }
}
