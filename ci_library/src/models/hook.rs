//! A webhook delivery received from the SCM.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub number: Option<i32>,
    pub source_id: Option<String>,
    pub created: Option<i64>,
    pub host: Option<String>,
    pub event: Option<String>,
    pub event_action: Option<String>,
    pub branch: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub link: Option<String>,
    pub webhook_id: Option<i64>,
}
