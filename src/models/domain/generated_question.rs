use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GeneratedQuestion {
    pub id: String,
    pub passage_id: String,
    pub question_type_id: String,
    #[serde(default)]
    pub question_data: serde_json::Value, // model output, stored as jsonb
    pub created_at: DateTime<Utc>,
}

impl GeneratedQuestion {
    pub fn new(passage_id: &str, question_type_id: &str, question_data: serde_json::Value) -> Self {
        GeneratedQuestion {
            id: Uuid::new_v4().to_string(),
            passage_id: passage_id.to_string(),
            question_type_id: question_type_id.to_string(),
            question_data,
            created_at: Utc::now(),
        }
    }

    /// Hex SHA-256 of `question_data`. Object keys serialize sorted, so equal
    /// JSON values hash equally regardless of key order.
    pub fn fingerprint(&self) -> String {
        let canonical = self.question_data.to_string();
        Sha256::digest(canonical.as_bytes())
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }
}
