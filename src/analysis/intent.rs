use crate::models::{IntentBucket, IntentScore, RawIntent};

/// Rescale an arbitrary non-negative intent vector so the four buckets
/// sum to exactly 100 and pick the dominant bucket.
///
/// Each bucket is rounded independently, so the scaled sum can miss 100
/// by a small remainder. The entire remainder is applied to `buy_soon`
/// (clamped at zero), not redistributed proportionally - downstream
/// consumers depend on that exact correction target.
pub fn normalize_intent(raw: &RawIntent) -> IntentScore {
    let total = match raw.total() {
        t if t == 0.0 => 1.0,
        t => t,
    };

    let buy_now = scale(raw.buy_now, total);
    let mut buy_soon = scale(raw.buy_soon, total);
    let later = scale(raw.later, total);
    let no_fit = scale(raw.no_fit, total);

    let remainder = 100i64 - (buy_now + buy_soon + later + no_fit) as i64;
    if remainder != 0 {
        buy_soon = (buy_soon as i64 + remainder).max(0) as u32;
    }

    let primary = pick_primary([buy_now, buy_soon, later, no_fit]);

    IntentScore {
        buy_now,
        buy_soon,
        later,
        no_fit,
        primary,
    }
}

fn scale(value: f64, total: f64) -> u32 {
    (value / total * 100.0).round() as u32
}

/// Bucket with the highest value; ties resolve to the earliest bucket
/// in canonical order (BuyNow > BuySoon > Later > NoFit)
fn pick_primary(values: [u32; 4]) -> IntentBucket {
    let mut best = IntentBucket::ORDERED[0];
    let mut best_value = values[0];
    for (bucket, value) in IntentBucket::ORDERED.into_iter().zip(values).skip(1) {
        if value > best_value {
            best = bucket;
            best_value = value;
        }
    }
    best
}
