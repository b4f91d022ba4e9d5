// Threat classifier
// Severity from categories alone, independent of risk scoring.

use crate::entities::Item;
use crate::value_objects::{PrimaryCategory, SecondaryCategory, ThreatLevel};

/// Total over every categorical combination. Severities are tested from the
/// highest down and the first match wins, so an item that is both a weapon
/// and alcohol classifies as HIGH.
pub fn classify(item: &Item) -> ThreatLevel {
    let primary = item.primary_category();
    let secondary = item.secondary_category();

    if is_critical(secondary) {
        ThreatLevel::Critical
    } else if is_high(primary, secondary) {
        ThreatLevel::High
    } else if is_medium(primary, secondary) {
        ThreatLevel::Medium
    } else if is_low(primary, secondary) {
        ThreatLevel::Low
    } else {
        ThreatLevel::None
    }
}

fn is_critical(secondary: SecondaryCategory) -> bool {
    matches!(
        secondary,
        SecondaryCategory::Firearm | SecondaryCategory::IllegalSubstance
    )
}

fn is_high(primary: PrimaryCategory, secondary: SecondaryCategory) -> bool {
    primary == PrimaryCategory::Weapon
        || matches!(
            secondary,
            SecondaryCategory::SharpObject | SecondaryCategory::ChemicalSubstance
        )
}

fn is_medium(primary: PrimaryCategory, secondary: SecondaryCategory) -> bool {
    matches!(
        primary,
        PrimaryCategory::Alcohol | PrimaryCategory::ProhibitedSubstance
    ) || secondary == SecondaryCategory::AlcoholicBeverage
}

fn is_low(primary: PrimaryCategory, secondary: SecondaryCategory) -> bool {
    primary == PrimaryCategory::Tobacco
        || matches!(
            secondary,
            SecondaryCategory::SmokingProduct | SecondaryCategory::ElectronicSmoking
        )
}
