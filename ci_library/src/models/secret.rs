//! A named secret scoped to a repo, an org, or a shared team.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub id: Option<i64>,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub team: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub images: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
    pub allow_command: Option<bool>,
    pub allow_substitution: Option<bool>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
}

impl Secret {
    /// Copy with the value blanked, for responses.
    pub fn sanitized(&self) -> Self {
        Self {
            value: Some(crate::constants::SECRET_LOG_MASK.to_string()),
            ..self.clone()
        }
    }
}
