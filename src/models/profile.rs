//! User profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DecodeError;

/// A user profile. The id doubles as the user id referenced by other
/// entities; nothing cross-checks those references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile id, shared with the external user identity
    pub id: Uuid,
    /// Email address (may be absent if not shared)
    pub email: Option<String>,
    /// Display name
    pub full_name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// When the profile was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the profile was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Decode a profile from its external JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        crate::models::decode("Profile", json)
    }
}
