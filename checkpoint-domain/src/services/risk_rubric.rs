// Risk rubric
// Additive, explainable scoring for single-use plastic items.

use tracing::debug;

use crate::entities::{Item, RiskBreakdown, RiskFactor};
use crate::error::DomainError;
use crate::value_objects::{
    ConsumptionContext, ItemFunction, PrimaryCategory, Replaceability, SecondaryCategory,
    UsageType,
};

/// The only primary category the rubric scores.
pub const REGULATED_SCOPE: PrimaryCategory = PrimaryCategory::SingleUsePlastic;

const BASE_RISK: i32 = 12;
const QUANTITY_STEP: i32 = 2;
const QUANTITY_CAP: i32 = 20;

/// Stateless scorer. Factors are always produced in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskRubric;

impl RiskRubric {
    pub fn evaluate(item: &Item) -> Result<RiskBreakdown, DomainError> {
        if item.primary_category() != REGULATED_SCOPE {
            return Err(DomainError::OutOfScope {
                category: item.primary_category(),
            });
        }

        let mut factors = vec![
            RiskFactor::new(
                "Base Risk",
                REGULATED_SCOPE.as_str(),
                BASE_RISK,
                "All plastic items carry inherent environmental policy risk",
            )?,
            usage_factor(item.usage_type())?,
            replaceability_factor(item.replaceability())?,
            secondary_factor(item.secondary_category())?,
            function_factor(item.function())?,
            context_factor(item.context())?,
        ];

        let bonus = quantity_bonus(item.quantity());
        if bonus > 0 {
            factors.push(RiskFactor::new(
                "Quantity",
                item.quantity().to_string(),
                bonus,
                format!(
                    "Multiple items detected ({} units) - bulk violation",
                    item.quantity()
                ),
            )?);
        }

        let breakdown = RiskBreakdown::from_factors(factors)?;
        debug!(
            item = item.name(),
            score = breakdown.total_score(),
            factors = breakdown.factors().len(),
            "rubric scored item"
        );
        Ok(breakdown)
    }
}

/// Extra penalty for bulk quantities: two points per unit beyond the first,
/// capped at twenty.
pub fn quantity_bonus(quantity: u32) -> i32 {
    let extra = i32::try_from(quantity.saturating_sub(1)).unwrap_or(i32::MAX);
    extra.saturating_mul(QUANTITY_STEP).min(QUANTITY_CAP)
}

fn usage_factor(usage: UsageType) -> Result<RiskFactor, DomainError> {
    let (points, rationale) = match usage {
        UsageType::SingleUse => (30, "Item is designed for single-use and disposal"),
        UsageType::Reusable => (-20, "Item can be reused, reducing environmental impact"),
        UsageType::Other => (18, "Item has uncertain reusability profile"),
    };
    RiskFactor::new("Usage Type", usage.as_str(), points, rationale)
}

fn replaceability_factor(replaceability: Replaceability) -> Result<RiskFactor, DomainError> {
    let (points, rationale) = match replaceability {
        Replaceability::High => (25, "Eco-friendly alternatives available"),
        Replaceability::Medium => (13, "Alternatives available but may require adjustment"),
        Replaceability::Low => (4, "Limited alternatives available, minimal penalty applied"),
    };
    RiskFactor::new("Replaceability", replaceability.as_str(), points, rationale)
}

fn secondary_factor(secondary: SecondaryCategory) -> Result<RiskFactor, DomainError> {
    let (points, rationale) = match secondary {
        SecondaryCategory::FoodAccessory => (18, "Classified as food-related accessory"),
        SecondaryCategory::BeverageContainer => (14, "Classified as beverage container"),
        SecondaryCategory::FoodContainer => (10, "Classified as food storage container"),
        SecondaryCategory::Packaging => (4, "Classified as packaging material"),
        _ => (8, "Item category has standard policy impact"),
    };
    RiskFactor::new("Secondary Category", secondary.as_str(), points, rationale)
}

fn function_factor(function: ItemFunction) -> Result<RiskFactor, DomainError> {
    let (points, rationale) = match function {
        ItemFunction::Utensil => (12, "Item serves as eating utensil"),
        ItemFunction::Container => (8, "Item functions as storage or transport container"),
        ItemFunction::Packaging => (4, "Item serves packaging or wrapping purpose"),
        ItemFunction::Tool => (2, "Item functions as utility tool"),
        ItemFunction::Consumable | ItemFunction::Other => {
            (6, "Item has general functional purpose")
        }
    };
    RiskFactor::new("Function", function.as_str(), points, rationale)
}

fn context_factor(context: ConsumptionContext) -> Result<RiskFactor, DomainError> {
    let (points, rationale) = match context {
        ConsumptionContext::SchoolUse => (13, "Item intended for use within campus premises"),
        ConsumptionContext::Takeout => (9, "Item associated with takeout food service"),
        ConsumptionContext::Food => (7, "Item used in food consumption context"),
        ConsumptionContext::Beverage => (7, "Item used in beverage consumption context"),
        ConsumptionContext::PersonalUse => (4, "Item for general personal use"),
        ConsumptionContext::Unknown => {
            (12, "Context unclear - treated as high risk due to uncertainty")
        }
    };
    RiskFactor::new("Consumption Context", context.as_str(), points, rationale)
}
