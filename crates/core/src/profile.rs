//! Locally stored user profile.
//!
//! The profile never leaves the browser: it is serialized to JSON and kept
//! in the `userProfile` cookie. Values are free text and are not validated.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Name of the cookie holding the serialized profile.
pub const PROFILE_COOKIE: &str = "userProfile";

/// The user's fan profile. Every field is free text; missing fields decode
/// as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub favorite_character: String,
    pub favorite_movie: String,
    pub favorite_disneyland: String,
}

impl UserProfile {
    /// `"{first} {last}"`, trimmed when either half is blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// `"{city}, {state}"`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Encode for the cookie: JSON, then percent-encoded so the value stays
    /// within the cookie octet grammar.
    pub fn to_cookie_value(&self) -> Result<String, CoreError> {
        let json = serde_json::to_string(self)
            .map_err(|e| CoreError::Internal(format!("profile serialization failed: {e}")))?;
        Ok(urlencoding::encode(&json).into_owned())
    }

    /// Decode a cookie value written by [`UserProfile::to_cookie_value`].
    ///
    /// Plain (not percent-encoded) JSON is accepted too.
    pub fn from_cookie_value(raw: &str) -> Result<Self, CoreError> {
        let json = urlencoding::decode(raw)
            .map_err(|e| CoreError::Validation(format!("profile cookie is not UTF-8: {e}")))?;
        serde_json::from_str(&json)
            .map_err(|e| CoreError::Validation(format!("profile cookie is not a profile: {e}")))
    }
}
