//! Data models
//!
//! Shared between the gateway client, the mock record backend, and the
//! application shell. Wire field names follow the record backend schema
//! (`Id`, `Name`, `joinDate`, ...), so these types serialize directly into
//! backend payloads.

pub mod department;
pub mod employee;
pub mod event;
pub mod invite;
pub mod location;
pub mod user;

// Re-exports
pub use department::*;
pub use employee::*;
pub use event::*;
pub use invite::*;
pub use location::*;
pub use user::*;
