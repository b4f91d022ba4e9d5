// Decision band mapper

use crate::value_objects::Decision;

/// Highest score that is still allowed.
pub const ALLOW_THRESHOLD: i32 = 30;
/// Highest score that is conditionally handled.
pub const CONDITIONAL_THRESHOLD: i32 = 70;

pub fn map_score_to_decision(score: i32) -> Decision {
    if score <= ALLOW_THRESHOLD {
        Decision::Allow
    } else if score <= CONDITIONAL_THRESHOLD {
        Decision::Conditional
    } else {
        Decision::Disallow
    }
}
