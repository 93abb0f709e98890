//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `backend`, `internships`, `toast`) so
//! components can depend on small focused models provided via context.

pub mod auth;
pub mod backend;
pub mod internships;
pub mod toast;
