//! Toast notification queue.
//!
//! Toasts are short-lived messages stacked in a corner of the page. The queue
//! is capped; pushing past the cap drops the oldest toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum number of toasts visible at once.
pub const MAX_TOASTS: usize = 3;

/// Visual style of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failure styling.
    Destructive,
}

impl ToastVariant {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Destructive => "toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
