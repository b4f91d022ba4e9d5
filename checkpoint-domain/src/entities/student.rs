// Student entity
// A person passing the checkpoint, with the item ids linked to their record

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{ItemId, StudentId, StudentStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    course: String,
    year: u8,
    status: StudentStatus,
    item_ids: Vec<ItemId>,
    enrollment_date: NaiveDate,
}

impl Student {
    /// Outsiders carry year 0; everyone else must be in year 1 to 6.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        course: impl Into<String>,
        year: u8,
        status: StudentStatus,
        item_ids: Vec<ItemId>,
        enrollment_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let course = course.into();
        require_non_blank(id.as_str(), "student id")?;
        require_non_blank(&name, "name")?;
        require_non_blank(&course, "course")?;
        validate_year(year, status)?;
        Ok(Self {
            id: StudentId::new(id.0),
            name: name.trim().to_string(),
            course: course.trim().to_string(),
            year,
            status,
            item_ids,
            enrollment_date,
        })
    }

    pub fn with_status(&self, status: StudentStatus) -> Result<Self, DomainError> {
        validate_year(self.year, status)?;
        Ok(Self {
            status,
            ..self.clone()
        })
    }

    pub fn with_added_item(&self, item_id: ItemId) -> Self {
        let mut item_ids = self.item_ids.clone();
        item_ids.push(item_id);
        Self {
            item_ids,
            ..self.clone()
        }
    }

    /// Removes one occurrence of the id, if present.
    pub fn with_removed_item(&self, item_id: ItemId) -> Self {
        let mut item_ids = self.item_ids.clone();
        if let Some(pos) = item_ids.iter().position(|id| *id == item_id) {
            item_ids.remove(pos);
        }
        Self {
            item_ids,
            ..self.clone()
        }
    }

    pub fn with_year(&self, year: u8) -> Result<Self, DomainError> {
        if year > 6 {
            return Err(DomainError::InvalidStudent(format!(
                "year must be between 0 and 6, got: {}",
                year
            )));
        }
        validate_year(year, self.status)?;
        Ok(Self {
            year,
            ..self.clone()
        })
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn status(&self) -> StudentStatus {
        self.status
    }

    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn violation_count(&self) -> usize {
        self.item_ids.len()
    }

    pub fn has_violations(&self) -> bool {
        !self.item_ids.is_empty()
    }

    pub fn is_enrolled(&self) -> bool {
        matches!(self.status, StudentStatus::Enrolled | StudentStatus::Suspended)
    }

    pub fn is_suspended(&self) -> bool {
        self.status == StudentStatus::Suspended
    }
}

fn require_non_blank(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidStudent(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

fn validate_year(year: u8, status: StudentStatus) -> Result<(), DomainError> {
    match status {
        StudentStatus::Outsider if year != 0 => Err(DomainError::InvalidStudent(format!(
            "outsiders must have year = 0, got: {}",
            year
        ))),
        StudentStatus::Enrolled | StudentStatus::Suspended if !(1..=6).contains(&year) => {
            Err(DomainError::InvalidStudent(format!(
                "year must be between 1 and 6 for students, got: {}",
                year
            )))
        }
        _ => Ok(()),
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[id={}, name={}, course={}, year={}, status={}, violations={}]",
            self.id,
            self.name,
            self.course,
            self.year,
            self.status,
            self.violation_count()
        )
    }
}
