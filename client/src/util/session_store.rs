//! Session persistence in `localStorage`.
//!
//! A signed-in session survives reloads by being stored as JSON under a single
//! key. Expired or unreadable entries are treated as signed out. Requires a
//! browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use listings::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "internboard_session";

/// Decode a stored session, dropping it when malformed or expired.
pub(crate) fn decode_stored(raw: &str, now_secs: i64) -> Option<Session> {
    let session: Session = serde_json::from_str(raw).ok()?;
    (!session.is_expired(now_secs)).then_some(session)
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Current time in seconds since the Unix epoch (browser clock).
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Restore the stored session, clearing it if it is no longer usable.
pub fn load(now_secs: i64) -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let session = decode_stored(&raw, now_secs);
        if session.is_none() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = now_secs;
        None
    }
}

/// Persist `session` for later page loads.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Ok(raw)) = (storage(), serde_json::to_string(session)) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Forget the stored session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
