//! Directory state: the employee collection and its UI state
//!
//! Owns the in-memory employee collection for the session, the active
//! filter, the modal selection machine and the view mode. All mutation
//! happens on the main loop; network results are applied here after the
//! fact.

use crate::directory::form::EmployeeForm;
use chrono::{Datelike, NaiveDate};
use shared::models::{Department, Employee, EmployeeDraft, EmployeeStatus, Location};
use shared::{AppError, AppResult};

/// Conjunctive filter over the collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    /// Case-insensitive substring over name, email, designation
    pub search: String,
    pub department: Option<Department>,
    pub location: Option<Location>,
    pub status: Option<EmployeeStatus>,
}

impl DirectoryFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = self.department {
            if employee.department != department {
                return false;
            }
        }
        if let Some(location) = self.location {
            if employee.location != location {
                return false;
            }
        }
        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = employee.name.to_lowercase().contains(&needle)
                || employee.email.to_lowercase().contains(&needle)
                || employee.designation.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Reset all criteria. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Which modal, if any, is open
#[derive(Debug, Default)]
pub enum Selection {
    #[default]
    Idle,
    Viewing(i64),
    /// Blank form = create, form with id = edit
    Editing(EmployeeForm),
    ConfirmingDelete(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Grid,
            Self::Grid => Self::Table,
        }
    }
}

/// Result of a successful upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(i64),
    Updated(i64),
}

#[derive(Debug, Default)]
pub struct DirectoryState {
    employees: Vec<Employee>,
    next_id: i64,
    pub filter: DirectoryFilter,
    pub selection: Selection,
    pub view_mode: ViewMode,
    /// Row highlighted in the table/grid
    pub cursor: usize,
    /// A fetch or mutation is in flight
    pub loading: bool,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Replace the collection with backend results
    pub fn load(&mut self, employees: Vec<Employee>) {
        self.next_id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.employees = employees;
        self.cursor = 0;
        self.selection = Selection::Idle;
    }

    /// Filtered view, append-stable order
    pub fn list(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Create or replace an employee.
    ///
    /// A draft without an id gets a fresh session-unique id and is appended;
    /// a draft with an id replaces that record in place. Validation failure
    /// leaves the collection untouched.
    pub fn upsert(&mut self, draft: EmployeeDraft, today: NaiveDate) -> AppResult<UpsertOutcome> {
        draft.validate()?;

        match draft.id {
            Some(id) => {
                let Some(slot) = self.employees.iter_mut().find(|e| e.id == id) else {
                    return Err(AppError::employee_not_found(id));
                };
                let fallback = slot.join_date;
                *slot = draft.into_employee(id, fallback);
                tracing::info!(id, "employee updated");
                Ok(UpsertOutcome::Updated(id))
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.employees.push(draft.into_employee(id, today));
                tracing::info!(id, "employee created");
                Ok(UpsertOutcome::Created(id))
            }
        }
    }

    /// Remove an employee by id.
    ///
    /// Removing an absent id is a reported error, not a silent no-op. Any
    /// selection or pending confirmation referencing the id is cleared.
    pub fn remove(&mut self, id: i64) -> AppResult<Employee> {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return Err(AppError::employee_not_found(id));
        };
        let removed = self.employees.remove(index);

        let references_removed = match &self.selection {
            Selection::Viewing(sel) | Selection::ConfirmingDelete(sel) => *sel == id,
            Selection::Editing(form) => form.id() == Some(id),
            Selection::Idle => false,
        };
        if references_removed {
            self.selection = Selection::Idle;
        }
        if self.cursor > 0 && self.cursor >= self.list().len() {
            self.cursor -= 1;
        }

        tracing::info!(id, "employee removed");
        Ok(removed)
    }

    /// Reset all filter criteria. Idempotent.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.cursor = 0;
    }

    /// Dismiss whichever modal is open
    pub fn dismiss(&mut self) {
        self.selection = Selection::Idle;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let visible = self.list().len();
        if visible == 0 {
            self.cursor = 0;
            return;
        }
        let max = visible - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Employee currently under the cursor, respecting the filter
    pub fn under_cursor(&self) -> Option<&Employee> {
        self.list().get(self.cursor).copied()
    }

    // Dashboard-facing counts

    pub fn count_by_status(&self, status: EmployeeStatus) -> usize {
        self.employees.iter().filter(|e| e.status == status).count()
    }

    pub fn joined_in_month(&self, year: i32, month: u32) -> usize {
        self.employees
            .iter()
            .filter(|e| e.join_date.year() == year && e.join_date.month() == month)
            .count()
    }
}
