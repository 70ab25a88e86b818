//! PeoplePulse record backend client
//!
//! Thin CRUD wrapper around the external record store. Each entity table
//! gets a [`RecordGateway`] that filters outbound payloads to the table's
//! allow-list of client-writable fields and normalizes backend failures
//! into [`GatewayError`]s. The identity endpoints are wrapped separately by
//! [`IdentityClient`].

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod identity;
pub mod query;
pub mod table;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::RecordGateway;
pub use http::RecordHttpClient;
pub use identity::IdentityClient;
pub use query::{Condition, QueryParams, WhereGroup};
pub use table::TableSpec;
