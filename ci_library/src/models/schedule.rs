//! A cron-driven build trigger for a repository.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub active: Option<bool>,
    pub name: Option<String>,
    pub entry: Option<String>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
    pub scheduled_at: Option<i64>,
    pub branch: Option<String>,
    pub error: Option<String>,
}
