//! Department Model

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of departments an employee can belong to
///
/// Value-level reference, not a foreign key: the directory filters compare
/// against these labels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Operations")]
    Operations,
}

impl Department {
    /// All departments, in display order
    pub const ALL: [Department; 6] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::HumanResources,
        Department::Finance,
        Department::Operations,
    ];

    /// Display / wire label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::HumanResources => "Human Resources",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
        }
    }
}

impl Default for Department {
    fn default() -> Self {
        Self::Engineering
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.label() == s).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::UnknownDepartment,
                format!("Unknown department: {}", s),
            )
        })
    }
}

/// Department record as stored in the record backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for dept in Department::ALL {
            assert_eq!(dept.label().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_wire_format_uses_label() {
        let json = serde_json::to_string(&Department::HumanResources).unwrap();
        assert_eq!(json, "\"Human Resources\"");
    }

    #[test]
    fn test_unknown_department_rejected() {
        let err = "Catering".parse::<Department>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownDepartment);
    }
}
