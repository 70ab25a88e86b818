//! Employee Model

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::department::Department;
use super::location::Location;

/// Employee working status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Inactive")]
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "On Notice")]
    OnNotice,
}

impl EmployeeStatus {
    /// All statuses, in display order
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::Active,
        EmployeeStatus::Inactive,
        EmployeeStatus::OnLeave,
        EmployeeStatus::OnNotice,
    ];

    /// Display / wire label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "On Leave",
            Self::OnNotice => "On Notice",
        }
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    crate::error::ErrorCode::UnknownStatus,
                    format!("Unknown employee status: {}", s),
                )
            })
    }
}

/// Employee entity
///
/// Wire names match the record backend schema: the backend assigns `Id` and
/// manages the audit fields, which are therefore absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    pub email: String,
    pub department: Department,
    pub designation: String,
    pub location: Location,
    pub status: EmployeeStatus,
    #[serde(rename = "joinDate")]
    pub join_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Avatar URI reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Create/update payload for an employee
///
/// A draft without an `id` is a creation; a draft carrying an `id` replaces
/// the matching record in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: String,
    pub email: String,
    pub department: Option<Department>,
    pub designation: String,
    pub location: Option<Location>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(rename = "joinDate")]
    pub join_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl EmployeeDraft {
    /// Validate the mandatory fields: name, email, department, designation.
    ///
    /// Returns a `ValidationFailed` error naming the first missing field.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required").with_detail("field", "name"));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::validation("Email is required").with_detail("field", "email"));
        }
        if self.department.is_none() {
            return Err(
                AppError::validation("Department is required").with_detail("field", "department")
            );
        }
        if self.designation.trim().is_empty() {
            return Err(
                AppError::validation("Designation is required").with_detail("field", "designation")
            );
        }
        Ok(())
    }

    /// Convert into an [`Employee`] with the given identifier.
    ///
    /// Caller must have validated the draft first; unset optional fields
    /// fall back to defaults (Remote location, today omitted in favor of
    /// the draft's join date when present).
    pub fn into_employee(self, id: i64, fallback_join_date: NaiveDate) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department.unwrap_or_default(),
            designation: self.designation,
            location: self.location.unwrap_or_default(),
            status: self.status,
            join_date: self.join_date.unwrap_or(fallback_join_date),
            phone: self.phone,
            avatar: self.avatar,
        }
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(e: Employee) -> Self {
        Self {
            id: Some(e.id),
            name: e.name,
            email: e.email,
            department: Some(e.department),
            designation: e.designation,
            location: Some(e.location),
            status: e.status,
            join_date: Some(e.join_date),
            phone: e.phone,
            avatar: e.avatar,
        }
    }
}
