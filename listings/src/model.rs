//! Row shapes for the backend `internships` and `applications` tables.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A posted internship as returned by `select=*` on the `internships` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    /// Backend-assigned identifier. Accepted as a JSON string or integer.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Position title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Free-form description, if the posting has one.
    #[serde(default)]
    pub description: Option<String>,
    /// Human-readable duration (e.g. `"3 months"`), if known.
    #[serde(default)]
    pub duration: Option<String>,
    /// ISO 8601 creation timestamp. Only the backend orders on it.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Internship {
    /// Description text, or `None` when absent or blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Duration label, or `None` when absent or blank.
    #[must_use]
    pub fn duration_label(&self) -> Option<&str> {
        self.duration
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Lifecycle status written on an application row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// The only status this client ever writes.
    #[default]
    Applied,
}

/// Insert payload for the `applications` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    /// Internship being applied to.
    pub internship_id: String,
    /// Authenticated applicant.
    pub user_id: String,
    /// Always [`ApplicationStatus::Applied`] on creation.
    pub status: ApplicationStatus,
}

impl NewApplication {
    /// Build an `applied` row for `user_id` on `internship_id`.
    #[must_use]
    pub fn applied(internship_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            internship_id: internship_id.into(),
            user_id: user_id.into(),
            status: ApplicationStatus::Applied,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => {
            Ok(number.to_string())
        }
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
