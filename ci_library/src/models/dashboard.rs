//! A user-curated view over several repositories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
    pub admins: Option<Vec<String>>,
    pub repos: Option<Vec<DashboardRepo>>,
}

/// Repository entry on a dashboard, with optional branch/event filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRepo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub branches: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
}
