// Item entity
// A physical item logged at the checkpoint. Never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{
    ConsumptionContext, ItemFunction, ItemStatus, PrimaryCategory, Replaceability,
    SecondaryCategory, StudentId, UsageType,
};

/// The categorical profile of an item: everything the rule components read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub primary_category: PrimaryCategory,
    pub secondary_category: SecondaryCategory,
    pub function: ItemFunction,
    pub context: ConsumptionContext,
    pub usage_type: UsageType,
    pub replaceability: Replaceability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    brand: Option<String>,
    attributes: ItemAttributes,
    status: ItemStatus,
    quantity: u32,
    timestamp: DateTime<Utc>,
    holder: Option<StudentId>,
}

impl Item {
    /// Creates a HELD item stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        attributes: ItemAttributes,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidItem(
                "item name cannot be empty".to_string(),
            ));
        }
        validate_quantity(quantity)?;
        Ok(Self {
            name: name.trim().to_string(),
            brand: None,
            attributes,
            status: ItemStatus::Held,
            quantity,
            timestamp: Utc::now(),
            holder: None,
        })
    }

    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    pub fn with_holder(mut self, holder: Option<StudentId>) -> Self {
        self.holder = holder.filter(|id| !id.as_str().is_empty());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_status(&self, status: ItemStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn with_quantity(&self, quantity: u32) -> Result<Self, DomainError> {
        validate_quantity(quantity)?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn attributes(&self) -> &ItemAttributes {
        &self.attributes
    }

    pub fn primary_category(&self) -> PrimaryCategory {
        self.attributes.primary_category
    }

    pub fn secondary_category(&self) -> SecondaryCategory {
        self.attributes.secondary_category
    }

    pub fn function(&self) -> ItemFunction {
        self.attributes.function
    }

    pub fn context(&self) -> ConsumptionContext {
        self.attributes.context
    }

    pub fn usage_type(&self) -> UsageType {
        self.attributes.usage_type
    }

    pub fn replaceability(&self) -> Replaceability {
        self.attributes.replaceability
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn holder(&self) -> Option<&StudentId> {
        self.holder.as_ref()
    }
}

fn validate_quantity(quantity: u32) -> Result<(), DomainError> {
    if quantity == 0 {
        return Err(DomainError::InvalidItem(
            "quantity must be greater than 0, got: 0".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.attributes;
        write!(
            f,
            "{} [{} | {} | {} | {} | {} | {} | {} | Qty: {} | {}",
            self.name,
            a.primary_category,
            a.secondary_category,
            a.function,
            a.context,
            a.usage_type,
            a.replaceability,
            self.status,
            self.quantity,
            self.timestamp.date_naive(),
        )?;
        if let Some(brand) = &self.brand {
            write!(f, " | {}", brand)?;
        }
        if let Some(holder) = &self.holder {
            write!(f, " | Student: {}", holder)?;
        }
        f.write_str("]")
    }
}
