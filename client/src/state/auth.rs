//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the nav bar and the apply gate; written by the auth modal and by
//! the session restore on startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use listings::Session;

/// Authentication state tracking the current session and restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been checked after hydration.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Label shown in the nav bar for the signed-in user.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(Session::display_name)
    }
}
