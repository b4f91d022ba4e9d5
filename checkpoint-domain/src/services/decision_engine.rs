// Decision engine
// Composes the gate, classifier, rubric, band mapper and advisor.

use tracing::{debug, info};

use crate::entities::{DecisionResult, Item, RiskBreakdown};
use crate::error::DomainError;
use crate::services::action_advisor::{requires_immediate_alert, scored_action, threat_action};
use crate::services::decision_band::{map_score_to_decision, ALLOW_THRESHOLD, CONDITIONAL_THRESHOLD};
use crate::services::policy_gate::check_hard_policy;
use crate::services::risk_rubric::{RiskRubric, REGULATED_SCOPE};
use crate::services::threat_classifier::classify;
use crate::value_objects::{Decision, ThreatLevel};

const OUT_OF_SCOPE_REASON: &str = "Item not within scope of plastic policy";
const OUT_OF_SCOPE_ACTION: &str = "[✓] NO HARD POLICY VIOLATION\nItem permitted on campus.";

/// Which path an item took through the pipeline.
#[derive(Debug)]
enum Assessment {
    HardViolation {
        reason: &'static str,
        threat: ThreatLevel,
    },
    OutOfScope,
    Scored(RiskBreakdown),
}

/// Stateless orchestrator. Holds nothing between calls, so one engine can be
/// shared freely across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, item: &Item) -> Result<DecisionResult, DomainError> {
        let result = match assess(item)? {
            Assessment::HardViolation { reason, threat } => {
                let alert = requires_immediate_alert(threat);
                debug!(item = item.name(), threat = %threat, reason, "hard policy violation");
                DecisionResult::new(
                    item.clone(),
                    Decision::Disallow,
                    reason,
                    None,
                    threat,
                    threat_action(threat),
                    alert,
                )?
            }
            Assessment::OutOfScope => DecisionResult::new(
                item.clone(),
                Decision::Allow,
                OUT_OF_SCOPE_REASON,
                None,
                ThreatLevel::None,
                OUT_OF_SCOPE_ACTION,
                false,
            )?,
            Assessment::Scored(breakdown) => {
                let score = breakdown.total_score();
                let decision = map_score_to_decision(score);
                DecisionResult::new(
                    item.clone(),
                    decision,
                    scored_reason(decision, score),
                    Some(breakdown),
                    ThreatLevel::None,
                    scored_action(decision, score),
                    false,
                )?
            }
        };

        info!(
            item = item.name(),
            decision = %result.decision(),
            threat = %result.threat_level(),
            score = ?result.risk_score(),
            "item evaluated"
        );
        Ok(result)
    }
}

fn assess(item: &Item) -> Result<Assessment, DomainError> {
    if let Some(reason) = check_hard_policy(item) {
        return Ok(Assessment::HardViolation {
            reason,
            threat: classify(item),
        });
    }
    if item.primary_category() != REGULATED_SCOPE {
        return Ok(Assessment::OutOfScope);
    }
    RiskRubric::evaluate(item).map(Assessment::Scored)
}

fn scored_reason(decision: Decision, score: i32) -> String {
    match decision {
        Decision::Allow => format!(
            "Item within acceptable risk parameters (score: {} ≤ {})",
            score, ALLOW_THRESHOLD
        ),
        Decision::Conditional => format!("Item shows moderate policy concern (score: {}).", score),
        Decision::Disallow => format!(
            "Item violates plastic policy threshold (score: {} ≥ {})",
            score,
            CONDITIONAL_THRESHOLD + 1
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemAttributes;
    use crate::value_objects::{
        ConsumptionContext, ItemFunction, PrimaryCategory, Replaceability, SecondaryCategory,
        UsageType,
    };

    fn attributes(primary: PrimaryCategory, secondary: SecondaryCategory) -> ItemAttributes {
        ItemAttributes {
            primary_category: primary,
            secondary_category: secondary,
            function: ItemFunction::Container,
            context: ConsumptionContext::Beverage,
            usage_type: UsageType::Reusable,
            replaceability: Replaceability::Low,
        }
    }

    #[test]
    fn firearm_is_critical_disallow_with_alert() {
        let item = Item::new(
            "Handgun",
            attributes(PrimaryCategory::Weapon, SecondaryCategory::Firearm),
            1,
        )
        .unwrap();
        let result = DecisionEngine::new().evaluate(&item).unwrap();
        assert_eq!(result.decision(), Decision::Disallow);
        assert_eq!(result.threat_level(), ThreatLevel::Critical);
        assert_eq!(result.reason(), "Weapons prohibited under campus safety policy.");
        assert!(result.requires_immediate_alert());
        assert!(result.breakdown().is_none());
        assert!(result.is_hard_policy_violation());
    }

    #[test]
    fn tobacco_is_low_without_alert() {
        let item = Item::new(
            "Cigarettes",
            attributes(PrimaryCategory::Tobacco, SecondaryCategory::SmokingProduct),
            1,
        )
        .unwrap();
        let result = DecisionEngine::new().evaluate(&item).unwrap();
        assert_eq!(result.decision(), Decision::Disallow);
        assert_eq!(result.threat_level(), ThreatLevel::Low);
        assert!(!result.requires_immediate_alert());
        assert!(result.action_recommendation().contains("Issue verbal warning"));
    }

    #[test]
    fn allowed_item_is_out_of_scope() {
        let item = Item::new(
            "Textbook",
            attributes(PrimaryCategory::Allowed, SecondaryCategory::Packaging),
            3,
        )
        .unwrap();
        let result = DecisionEngine::new().evaluate(&item).unwrap();
        assert_eq!(result.decision(), Decision::Allow);
        assert_eq!(result.reason(), OUT_OF_SCOPE_REASON);
        assert_eq!(result.action_recommendation(), OUT_OF_SCOPE_ACTION);
        assert_eq!(result.threat_level(), ThreatLevel::None);
        assert!(result.risk_score().is_none());
        assert!(!result.is_hard_policy_violation());
    }

    #[test]
    fn reusable_bottle_is_allowed_with_score() {
        let item = Item::new(
            "Water bottle",
            attributes(PrimaryCategory::SingleUsePlastic, SecondaryCategory::BeverageContainer),
            1,
        )
        .unwrap();
        let result = DecisionEngine::new().evaluate(&item).unwrap();
        // 12 - 20 + 4 + 14 + 8 + 7
        assert_eq!(result.risk_score(), Some(25));
        assert_eq!(result.decision(), Decision::Allow);
        assert_eq!(
            result.reason(),
            "Item within acceptable risk parameters (score: 25 ≤ 30)"
        );
        assert!(!result.is_scored_violation());
    }

    #[test]
    fn scored_reasons_per_band() {
        assert_eq!(
            scored_reason(Decision::Conditional, 45),
            "Item shows moderate policy concern (score: 45)."
        );
        assert_eq!(
            scored_reason(Decision::Disallow, 112),
            "Item violates plastic policy threshold (score: 112 ≥ 71)"
        );
    }

    #[test]
    fn equal_items_give_equal_results() {
        let item = Item::new(
            "Straws",
            attributes(PrimaryCategory::SingleUsePlastic, SecondaryCategory::FoodAccessory),
            4,
        )
        .unwrap();
        let engine = DecisionEngine::new();
        assert_eq!(engine.evaluate(&item).unwrap(), engine.evaluate(&item).unwrap());
    }
}
