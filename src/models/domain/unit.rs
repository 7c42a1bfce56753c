use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Unit {
    pub id: String,
    pub textbook_id: String,
    #[serde(default)]
    pub parent_id: Option<String>, // None for top-level units
    pub title: String,
    pub order_index: i32, // position among siblings, ascending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Unit {
    pub fn new(textbook_id: &str, parent_id: Option<String>, title: &str, order_index: i32) -> Self {
        Unit {
            id: Uuid::new_v4().to_string(),
            textbook_id: textbook_id.to_string(),
            parent_id,
            title: title.to_string(),
            order_index,
            created_at: Some(Utc::now()),
        }
    }
}
