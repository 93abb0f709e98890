//! Shared internship-board domain model and backend wire contracts.
//!
//! This crate owns everything both the browser `client` and the `cli` need to
//! agree on: the `internships` / `applications` row shapes, the search filter,
//! the apply gate, auth session types, and the REST request builders for the
//! external backend. It performs no I/O; callers execute [`rest::RestRequest`]
//! values with whatever HTTP stack their platform provides.

pub mod auth;
pub mod error;
pub mod filter;
pub mod gate;
pub mod model;
pub mod rest;

pub use auth::{AuthUser, Credentials, Session, SignUpOutcome};
pub use error::BackendError;
pub use filter::{filter_internships, matches};
pub use gate::{ApplyGate, GateAction};
pub use model::{ApplicationStatus, Internship, NewApplication};
pub use rest::{BackendConfig, Method, RestRequest};
