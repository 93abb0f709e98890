//! Networking for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the host's public backend settings and executes `listings`
//! request builders against the external backend.

pub mod api;
