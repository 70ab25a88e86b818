//! Employee directory module
//!
//! [`state`] owns the collection and UI state, [`form`] the create/edit
//! modal, [`view`] the rendering.

pub mod form;
pub mod state;
pub mod view;

pub use form::EmployeeForm;
pub use state::{DirectoryFilter, DirectoryState, Selection, UpsertOutcome, ViewMode};
