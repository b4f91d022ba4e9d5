// Decision result entity
// The pipeline's single immutable output per evaluated item

use serde::Serialize;
use std::fmt;

use crate::entities::{Item, RiskBreakdown};
use crate::error::DomainError;
use crate::value_objects::{Decision, ThreatLevel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionResult {
    item: Item,
    decision: Decision,
    reason: String,
    breakdown: Option<RiskBreakdown>,
    threat_level: ThreatLevel,
    action_recommendation: String,
    requires_immediate_alert: bool,
}

impl DecisionResult {
    pub fn new(
        item: Item,
        decision: Decision,
        reason: impl Into<String>,
        breakdown: Option<RiskBreakdown>,
        threat_level: ThreatLevel,
        action_recommendation: impl Into<String>,
        requires_immediate_alert: bool,
    ) -> Result<Self, DomainError> {
        let reason = reason.into();
        let action_recommendation = action_recommendation.into();
        if reason.trim().is_empty() {
            return Err(DomainError::InvalidResult("reason cannot be empty".to_string()));
        }
        if action_recommendation.trim().is_empty() {
            return Err(DomainError::InvalidResult(
                "action recommendation cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            item,
            decision,
            reason,
            breakdown,
            threat_level,
            action_recommendation,
            requires_immediate_alert,
        })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Present only when the item went through the risk rubric.
    pub fn breakdown(&self) -> Option<&RiskBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    pub fn action_recommendation(&self) -> &str {
        &self.action_recommendation
    }

    pub fn requires_immediate_alert(&self) -> bool {
        self.requires_immediate_alert
    }

    pub fn has_risk_score(&self) -> bool {
        self.breakdown.is_some()
    }

    pub fn risk_score(&self) -> Option<i32> {
        self.breakdown.as_ref().map(RiskBreakdown::total_score)
    }

    pub fn is_hard_policy_violation(&self) -> bool {
        self.threat_level != ThreatLevel::None && !self.has_risk_score()
    }

    /// Scored item that did not make it into the allow band.
    pub fn is_scored_violation(&self) -> bool {
        self.has_risk_score() && self.decision != Decision::Allow
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecisionResult[item={}, decision={}, threat={}, score=",
            self.item.name(),
            self.decision,
            self.threat_level
        )?;
        match self.risk_score() {
            Some(score) => write!(f, "{}]", score),
            None => f.write_str("N/A]"),
        }
    }
}
