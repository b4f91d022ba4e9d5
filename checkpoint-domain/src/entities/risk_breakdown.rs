// Risk breakdown entity
// The explainable receipt for a risk score: every factor plus their total

use serde::Serialize;
use std::cmp::Reverse;
use std::fmt::Write as _;

use crate::entities::RiskFactor;
use crate::error::DomainError;
use crate::services::decision_band::map_score_to_decision;
use crate::value_objects::Decision;

/// Number of positive drivers listed in [`RiskBreakdown::explanation`].
const EXPLAINED_DRIVERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    factors: Vec<RiskFactor>,
    total_score: i32,
}

impl RiskBreakdown {
    /// `total_score` must equal the sum of the factor contributions.
    pub fn new(factors: Vec<RiskFactor>, total_score: i32) -> Result<Self, DomainError> {
        if factors.is_empty() {
            return Err(DomainError::EmptyBreakdown);
        }
        let calculated = checked_total(&factors)?;
        if calculated != total_score {
            return Err(DomainError::ScoreMismatch {
                provided: total_score,
                calculated,
            });
        }
        Ok(Self {
            factors,
            total_score,
        })
    }

    /// Builds a breakdown whose total is derived from the factors.
    pub fn from_factors(factors: Vec<RiskFactor>) -> Result<Self, DomainError> {
        let total = checked_total(&factors)?;
        Self::new(factors, total)
    }

    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// Factors that raised the score, largest first.
    pub fn positive_contributors(&self) -> Vec<&RiskFactor> {
        let mut positive: Vec<&RiskFactor> =
            self.factors.iter().filter(|f| f.is_positive()).collect();
        positive.sort_by_key(|f| Reverse(f.contribution()));
        positive
    }

    /// Factors that lowered the score, largest absolute impact first.
    pub fn negative_contributors(&self) -> Vec<&RiskFactor> {
        let mut negative: Vec<&RiskFactor> =
            self.factors.iter().filter(|f| f.is_negative()).collect();
        negative.sort_by_key(|f| Reverse(f.absolute_impact()));
        negative
    }

    pub fn top_contributors(&self, n: usize) -> Result<Vec<&RiskFactor>, DomainError> {
        if n == 0 {
            return Err(DomainError::InvalidArgument(
                "n must be positive, got: 0".to_string(),
            ));
        }
        Ok(self.positive_contributors().into_iter().take(n).collect())
    }

    pub fn largest_mitigating_factor(&self) -> Option<&RiskFactor> {
        self.negative_contributors().into_iter().next()
    }

    /// Natural-language summary for admin review.
    pub fn explanation(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "Risk Score: {}\n\n", self.total_score);

        let drivers: Vec<&RiskFactor> = self
            .positive_contributors()
            .into_iter()
            .take(EXPLAINED_DRIVERS)
            .collect();
        if !drivers.is_empty() {
            out.push_str("Primary Risk Drivers:\n");
            for factor in drivers {
                push_factor_lines(&mut out, factor);
            }
            out.push('\n');
        }

        match self.largest_mitigating_factor() {
            Some(factor) => {
                out.push_str("Mitigating Factor:\n");
                push_factor_lines(&mut out, factor);
                out.push('\n');
            }
            None => out.push_str("No mitigating factors identified.\n\n"),
        }

        out.push_str(match map_score_to_decision(self.total_score) {
            Decision::Disallow => {
                "The item significantly exceeds the policy threshold and should be disallowed."
            }
            Decision::Conditional => {
                "The item shows moderate policy concern and requires conditional review."
            }
            Decision::Allow => "The item falls within acceptable risk parameters.",
        });
        out
    }
}

/// Exact sum of the contributions; fails only when that sum leaves `i32`.
fn checked_total(factors: &[RiskFactor]) -> Result<i32, DomainError> {
    factors
        .iter()
        .try_fold(0i64, |acc, factor| acc.checked_add(i64::from(factor.contribution())))
        .and_then(|total| i32::try_from(total).ok())
        .ok_or(DomainError::ScoreOverflow)
}

fn push_factor_lines(out: &mut String, factor: &RiskFactor) {
    let _ = writeln!(
        out,
        "  • {} ({}): {:+}",
        factor.name(),
        factor.value(),
        factor.contribution()
    );
    let _ = writeln!(out, "    → {}", factor.rationale());
}
