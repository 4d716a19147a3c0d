/// Identifier assigned to a character by the external Disney API.
pub type CharacterId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
