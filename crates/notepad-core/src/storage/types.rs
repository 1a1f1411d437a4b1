//! Stored record data model.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::crypto::{content_hash, Envelope};
use crate::error::{NotepadError, Result};

/// A saved note as it sits in a slot.
///
/// Serialized as a flat JSON object:
/// `{"id": ..., "content": ..., "timestamp": ..., "hash": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Time-based identifier (UUIDv7 when written by this crate)
    pub id: String,

    /// The ciphertext envelope
    pub content: Envelope,

    /// When the record was saved (ISO-8601, millisecond precision)
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,

    /// Lowercase hex SHA-256 of `content`
    pub hash: String,
}

impl NoteRecord {
    /// Wrap an envelope for storage, stamped with `now`.
    pub fn seal(content: Envelope, now: DateTime<Utc>) -> Self {
        let hash = content_hash(content.as_str());
        Self {
            id: Uuid::now_v7().to_string(),
            content,
            timestamp: now.trunc_subsecs(3),
            hash,
        }
    }

    /// Check that `hash` still matches `content`.
    ///
    /// # Errors
    ///
    /// Returns `NotepadError::Integrity` on mismatch.
    pub fn verify(&self) -> Result<()> {
        let actual = content_hash(self.content.as_str());
        if !actual.eq_ignore_ascii_case(&self.hash) {
            return Err(NotepadError::Integrity(format!(
                "record {} hash {} does not match content hash {}",
                self.id, self.hash, actual
            )));
        }
        Ok(())
    }

    /// The timestamp as stored: ISO-8601 UTC with milliseconds.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| NotepadError::Storage(format!("Invalid stored record: {}", e)))
    }
}

/// Always `YYYY-MM-DDTHH:MM:SS.sssZ`, even when the milliseconds are zero.
fn serialize_millis<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn envelope() -> Envelope {
        Envelope::parse("-----BEGIN AGE ENCRYPTED FILE-----\nabc\n-----END AGE ENCRYPTED FILE-----")
            .unwrap()
    }

    #[test]
    fn test_seal_hashes_content() {
        let record = NoteRecord::seal(envelope(), Utc::now());
        assert_eq!(record.hash, content_hash(record.content.as_str()));
        assert!(record.verify().is_ok());
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique_v7() {
        let first = NoteRecord::seal(envelope(), Utc::now());
        let second = NoteRecord::seal(envelope(), Utc::now());
        assert_ne!(first.id, second.id);
        assert_eq!(Uuid::parse_str(&first.id).unwrap().get_version_num(), 7);
    }

    #[test]
    fn test_json_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let record = NoteRecord::seal(envelope(), now);
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["content", "hash", "id", "timestamp"]);
        assert_eq!(object["timestamp"], "2024-03-01T12:30:00.000Z");
        assert_eq!(object["content"], record.content.as_str());
    }

    #[test]
    fn test_timestamp_truncated_to_millis() {
        let now = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let record = NoteRecord::seal(envelope(), now);
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["timestamp"], "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_whole_second_keeps_millis_field() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let record = NoteRecord::seal(envelope(), now);
        let json = record.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timestamp"], "2023-11-14T22:13:20.000Z");
        assert_eq!(record.timestamp_iso(), "2023-11-14T22:13:20.000Z");

        let reloaded = NoteRecord::from_json(&json).unwrap();
        assert_eq!(reloaded.timestamp, now);
    }

    #[test]
    fn test_reads_timestamps_without_millis() {
        let stored = NoteRecord::seal(envelope(), Utc::now());
        let json = serde_json::json!({
            "id": stored.id,
            "content": stored.content.as_str(),
            "timestamp": "2023-11-14T22:13:20Z",
            "hash": stored.hash,
        })
        .to_string();

        let record = NoteRecord::from_json(&json).unwrap();
        assert_eq!(record.timestamp, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn test_blank_stored_content_rejected() {
        let json = r#"{"id":"1","content":"  ","timestamp":"2023-10-11T16:00:00.000Z","hash":"00"}"#;
        assert!(matches!(
            NoteRecord::from_json(json),
            Err(NotepadError::Storage(_))
        ));
    }

    #[test]
    fn test_accepts_foreign_ids() {
        let json = r#"{"id":"1697040000000","content":"U2FsdGVkX1+abc","timestamp":"2023-10-11T16:00:00.000Z","hash":"00"}"#;
        let record = NoteRecord::from_json(json).unwrap();
        assert_eq!(record.id, "1697040000000");
        assert!(matches!(record.verify(), Err(NotepadError::Integrity(_))));
    }

    #[test]
    fn test_tampered_content_fails_verify() {
        let mut record = NoteRecord::seal(envelope(), Utc::now());
        record.content = Envelope::parse("something else").unwrap();
        assert!(matches!(record.verify(), Err(NotepadError::Integrity(_))));
    }
}
