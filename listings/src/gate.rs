//! Deferral gate for the "apply" action.
//!
//! Applying requires a signed-in user. When the visitor is signed out the
//! requested internship is parked here while the auth prompt is shown, and is
//! released exactly once when sign-in completes. Dismissing the prompt drops it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// What the caller should do after [`ApplyGate::request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateAction {
    /// The user is signed in; submit the application for this internship now.
    Submit(String),
    /// The user must authenticate first; the request has been deferred.
    PromptAuth,
}

/// Holds at most one deferred apply request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyGate {
    pending: Option<String>,
}

impl ApplyGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to apply to `internship_id`.
    ///
    /// A newer request replaces any older deferred one.
    pub fn request(&mut self, internship_id: &str, signed_in: bool) -> GateAction {
        if signed_in {
            self.pending = None;
            GateAction::Submit(internship_id.to_owned())
        } else {
            self.pending = Some(internship_id.to_owned());
            GateAction::PromptAuth
        }
    }

    /// Sign-in finished; take the deferred internship id, if any.
    pub fn auth_completed(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// The auth prompt was closed without signing in.
    pub fn auth_dismissed(&mut self) {
        self.pending = None;
    }

    /// Internship id waiting on sign-in.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}
