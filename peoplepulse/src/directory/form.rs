//! Employee create/edit form

use crossterm::event::{Event, KeyCode, KeyEvent};
use shared::models::{Department, Employee, EmployeeDraft, EmployeeStatus, Location};
use shared::{AppError, AppResult};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Department,
    Designation,
    Location,
    Status,
    JoinDate,
    Phone,
    Avatar,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Department,
        Field::Designation,
        Field::Location,
        Field::Status,
        Field::JoinDate,
        Field::Phone,
        Field::Avatar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Designation => "Designation",
            Self::Location => "Location",
            Self::Status => "Status",
            Self::JoinDate => "Join date",
            Self::Phone => "Phone",
            Self::Avatar => "Avatar",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal form state. A form without an id creates, with an id edits.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    id: Option<i64>,
    pub name: Input,
    pub email: Input,
    pub designation: Input,
    pub join_date: Input,
    pub phone: Input,
    pub avatar: Input,
    pub department: Option<Department>,
    pub location: Option<Location>,
    pub status: EmployeeStatus,
    pub focus: Field,
}

impl EmployeeForm {
    /// Blank create form
    pub fn blank() -> Self {
        Self {
            focus: Field::Name,
            ..Default::default()
        }
    }

    /// Edit form pre-filled from an existing employee
    pub fn edit(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: Input::new(employee.name.clone()),
            email: Input::new(employee.email.clone()),
            designation: Input::new(employee.designation.clone()),
            join_date: Input::new(employee.join_date.to_string()),
            phone: Input::new(employee.phone.clone().unwrap_or_default()),
            avatar: Input::new(employee.avatar.clone().unwrap_or_default()),
            department: Some(employee.department),
            location: Some(employee.location),
            status: employee.status,
            focus: Field::Name,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Apply a key to the focused field. Enum fields cycle with Left/Right,
    /// text fields feed the input widget.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            Field::Department => {
                if let KeyCode::Left | KeyCode::Right = key.code {
                    self.department = cycle_option(
                        &Department::ALL,
                        self.department,
                        key.code == KeyCode::Right,
                    );
                }
            }
            Field::Location => {
                if let KeyCode::Left | KeyCode::Right = key.code {
                    self.location =
                        cycle_option(&Location::ALL, self.location, key.code == KeyCode::Right);
                }
            }
            Field::Status => {
                if let KeyCode::Left | KeyCode::Right = key.code {
                    self.status = cycle(&EmployeeStatus::ALL, self.status, key.code == KeyCode::Right);
                }
            }
            Field::Name => drop(self.name.handle_event(&Event::Key(key))),
            Field::Email => drop(self.email.handle_event(&Event::Key(key))),
            Field::Designation => drop(self.designation.handle_event(&Event::Key(key))),
            Field::JoinDate => drop(self.join_date.handle_event(&Event::Key(key))),
            Field::Phone => drop(self.phone.handle_event(&Event::Key(key))),
            Field::Avatar => drop(self.avatar.handle_event(&Event::Key(key))),
        }
    }

    /// Build the draft submitted on save.
    ///
    /// The join date must be blank (defaults applied downstream) or a valid
    /// `YYYY-MM-DD` date; mandatory-field checks live in
    /// [`EmployeeDraft::validate`], not here, so the form surfaces the same
    /// errors as any other caller.
    pub fn to_draft(&self) -> AppResult<EmployeeDraft> {
        let join_date = match self.join_date.value().trim() {
            "" => None,
            raw => Some(raw.parse().map_err(|_| {
                AppError::validation("Join date must be YYYY-MM-DD").with_detail("field", "joinDate")
            })?),
        };

        Ok(EmployeeDraft {
            id: self.id,
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            department: self.department,
            designation: self.designation.value().trim().to_string(),
            location: self.location,
            status: self.status,
            join_date,
            phone: non_empty(self.phone.value()),
            avatar: non_empty(self.avatar.value()),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let i = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (i + 1) % all.len()
    } else {
        (i + all.len() - 1) % all.len()
    };
    all[next]
}

fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    Some(match current {
        None => {
            if forward {
                all[0]
            } else {
                all[all.len() - 1]
            }
        }
        Some(value) => cycle(all, value, forward),
    })
}
