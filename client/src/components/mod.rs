//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, listing cards, and modal surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod auth_modal;
pub mod footer;
pub mod internship_card;
pub mod internship_dialog;
pub mod nav_bar;
pub mod toaster;
