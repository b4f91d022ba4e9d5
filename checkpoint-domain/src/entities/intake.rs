// Intake payloads
// Raw records handed over by the intake workflow before they become domain values

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::entities::{Item, ItemAttributes, Student};
use crate::error::DomainError;
use crate::value_objects::{
    ConsumptionContext, ItemFunction, PrimaryCategory, Replaceability, SecondaryCategory,
    StudentId, StudentStatus, UsageType,
};

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeItem {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub primary_category: PrimaryCategory,
    pub secondary_category: SecondaryCategory,
    pub function: ItemFunction,
    pub context: ConsumptionContext,
    pub usage_type: UsageType,
    pub replaceability: Replaceability,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub holder: Option<String>,
}

impl IntakeItem {
    pub fn attributes(&self) -> ItemAttributes {
        ItemAttributes {
            primary_category: self.primary_category,
            secondary_category: self.secondary_category,
            function: self.function,
            context: self.context,
            usage_type: self.usage_type,
            replaceability: self.replaceability,
        }
    }

    pub fn holder_id(&self) -> Option<StudentId> {
        self.holder
            .as_deref()
            .map(StudentId::new)
            .filter(|id| !id.as_str().is_empty())
    }

    pub fn into_item(self) -> Result<Item, DomainError> {
        let attributes = self.attributes();
        let holder = self.holder_id();
        Ok(Item::new(self.name, attributes, self.quantity)?
            .with_brand(self.brand)
            .with_holder(holder))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeStudent {
    pub id: String,
    pub name: String,
    pub course: String,
    #[serde(default)]
    pub year: u8,
    pub status: StudentStatus,
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
}

impl IntakeStudent {
    /// Enrollment date defaults to today.
    pub fn into_student(self) -> Result<Student, DomainError> {
        let enrollment_date = self
            .enrollment_date
            .unwrap_or_else(|| Utc::now().date_naive());
        Student::new(
            StudentId::new(self.id),
            self.name,
            self.course,
            self.year,
            self.status,
            Vec::new(),
            enrollment_date,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeManifest {
    #[serde(default)]
    pub students: Vec<IntakeStudent>,
    #[serde(default)]
    pub items: Vec<IntakeItem>,
}
