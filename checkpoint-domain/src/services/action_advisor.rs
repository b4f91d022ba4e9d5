// Action advisor
// Fixed gate-staff scripts for each threat level and scored decision.

use crate::value_objects::{Decision, ThreatLevel};

const CRITICAL_SCRIPT: &str = "[!]CRITICAL ALERT - CRITICAL SECURITY PROTOCOL REQUIRED\n\
ACTION: Do not allow entry\n\
1. Secure item immediately\n\
2. Contact provincial police immediately\n\
3. Detain individual for verification\n\
4. File incident report and secure item as evidence\n\
FOLLOW-UP: Contact student affairs within 24 hours";

const HIGH_SCRIPT: &str = "HIGH THREAT - IMMEDIATE ACTION REQUIRED\n\
ACTION: Confiscate and hold\n\
1. Confiscate item (do not return)\n\
2. Log student ID and details\n\
3. Consider student disciplinary action immediately\n\
FOLLOW-UP: Routine Processing";

const MEDIUM_SCRIPT: &str = "POLICY VIOLATION - CONFISCATION REQUIRED\n\
ACTION: Confiscate item\n\
1. Inform student of violation\n\
2. Confiscate item (issue receipt)\n\
3. Log violation details\n\
FOLLOW-UP: Routine Processing";

const LOW_SCRIPT: &str = " HEALTH POLICY VIOLATION\n\
ACTION: Confiscate and warn\n\
1. Confiscate item\n\
2. Issue verbal warning\n\
3. Log for records\n\
FOLLOW-UP: No further action required";

const NO_THREAT_SCRIPT: &str = "NO THREAT DETECTED\nACTION: Proceed with standard processing";

const ALLOW_SCRIPT: &str = "RECOMMENDED ACTION:\n\
• Allow item on campus\n\
• No confiscation required\n\
• Item meets policy standards";

const CONDITIONAL_SCRIPT: &str = "RECOMMENDED ACTION:\n\
• Confiscate item and issue receipt\n\
• Issue verbal warning about single-use plastics\n\
• Log violation for student records\n\
• Recommend policy review meeting if repeated violations";

const DISALLOW_SCRIPT: &str = "RECOMMENDED ACTION:\n\
• Confiscate item and issue receipt\n\
• Issue verbal warning about single-use plastics\n\
• Log violation for student records";

pub fn threat_action(level: ThreatLevel) -> &'static str {
    match level {
        ThreatLevel::Critical => CRITICAL_SCRIPT,
        ThreatLevel::High => HIGH_SCRIPT,
        ThreatLevel::Medium => MEDIUM_SCRIPT,
        ThreatLevel::Low => LOW_SCRIPT,
        ThreatLevel::None => NO_THREAT_SCRIPT,
    }
}

/// The score does not change the script today; it is accepted so callers
/// pass the same inputs the band mapper saw.
pub fn scored_action(decision: Decision, _score: i32) -> &'static str {
    match decision {
        Decision::Allow => ALLOW_SCRIPT,
        Decision::Conditional => CONDITIONAL_SCRIPT,
        Decision::Disallow => DISALLOW_SCRIPT,
    }
}

pub fn requires_immediate_alert(level: ThreatLevel) -> bool {
    matches!(level, ThreatLevel::High | ThreatLevel::Critical)
}
