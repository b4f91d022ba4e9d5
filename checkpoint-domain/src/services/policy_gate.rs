// Hard policy gate
// Zero-tolerance prohibitions. No scoring, no context: a match is terminal.

use crate::entities::Item;
use crate::value_objects::{PrimaryCategory, SecondaryCategory};

/// Returns the reason for the first matching prohibition, or `None` when the
/// item clears every hard rule. Primary-category rules are checked before
/// secondary-category rules, which fixes the reported reason when several
/// prohibitions apply.
pub fn check_hard_policy(item: &Item) -> Option<&'static str> {
    primary_violation(item.primary_category())
        .or_else(|| secondary_violation(item.secondary_category()))
}

fn primary_violation(primary: PrimaryCategory) -> Option<&'static str> {
    match primary {
        PrimaryCategory::Weapon => Some("Weapons prohibited under campus safety policy."),
        PrimaryCategory::Alcohol => Some("Alcoholic beverages prohibited on campus premises."),
        PrimaryCategory::Tobacco => Some("Tobacco products prohibited under campus health policy."),
        PrimaryCategory::ProhibitedSubstance => Some("Prohibited substances not allowed on campus."),
        PrimaryCategory::SingleUsePlastic | PrimaryCategory::Allowed => None,
    }
}

fn secondary_violation(secondary: SecondaryCategory) -> Option<&'static str> {
    match secondary {
        SecondaryCategory::Firearm => Some("Firearms prohibited under campus safety policy"),
        SecondaryCategory::IllegalSubstance => Some("Illegal substances prohibited by law"),
        SecondaryCategory::SharpObject => {
            Some("Sharp objects are prohibited under campus safety policy")
        }
        SecondaryCategory::SmokingProduct | SecondaryCategory::ElectronicSmoking => {
            Some("Smoking products are prohibited on campus premises.")
        }
        SecondaryCategory::AlcoholicBeverage => {
            Some("Alcoholic beverages are prohibited on campus premises.")
        }
        SecondaryCategory::ChemicalSubstance => {
            Some("Unregulated chemical substances are prohibited on campus premises.")
        }
        SecondaryCategory::FoodContainer
        | SecondaryCategory::BeverageContainer
        | SecondaryCategory::Packaging
        | SecondaryCategory::FoodAccessory => None,
    }
}
