use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiaryEntry {
    /// Create a new entry. The body must contain something other than
    /// whitespace; an empty title falls back to the creation date.
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let body = non_empty_body(body.into())?;
        let title = title.into();
        let title = if title.trim().is_empty() {
            now.strftime("%Y-%m-%d").to_string()
        } else {
            title.trim().to_string()
        };

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn edit(&mut self, title: Option<String>, body: Option<String>, now: Timestamp) -> Result<(), CoreError> {
        if let Some(body) = body {
            self.body = non_empty_body(body)?;
        }
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = title.trim().to_string();
        }
        self.updated_at = now;
        Ok(())
    }
}

fn non_empty_body(body: String) -> Result<String, CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::MissingField("body".to_string()));
    }
    Ok(body)
}
