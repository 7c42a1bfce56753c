use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Passage {
    pub id: String,
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Passage {
    pub fn new(unit_id: Option<String>, title: Option<String>, content: &str) -> Self {
        Passage {
            id: Uuid::new_v4().to_string(),
            unit_id,
            title,
            content: content.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
