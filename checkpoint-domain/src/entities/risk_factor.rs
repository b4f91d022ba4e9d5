// Risk factor entity
// One named, explainable contribution to a risk score

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    name: String,
    value: String,
    contribution: i32,
    rationale: String,
}

impl RiskFactor {
    /// Positive contributions penalize, negative ones mitigate.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        contribution: i32,
        rationale: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let value = value.into();
        let rationale = rationale.into();
        for (field, text) in [("name", &name), ("value", &value), ("rationale", &rationale)] {
            if text.trim().is_empty() {
                return Err(DomainError::InvalidFactor(format!(
                    "factor {} cannot be empty",
                    field
                )));
            }
        }
        Ok(Self {
            name,
            value,
            contribution,
            rationale,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn contribution(&self) -> i32 {
        self.contribution
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn is_positive(&self) -> bool {
        self.contribution > 0
    }

    pub fn is_negative(&self) -> bool {
        self.contribution < 0
    }

    pub fn absolute_impact(&self) -> u32 {
        self.contribution.unsigned_abs()
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}: {}] {:+} - {}",
            self.name, self.value, self.contribution, self.rationale
        )
    }
}
