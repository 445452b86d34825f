//! A build agent registered with the server.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub address: Option<String>,
    pub routes: Option<Vec<String>>,
    pub active: Option<bool>,
    pub status: Option<String>,
    pub last_status_update_at: Option<i64>,
    pub running_build_ids: Option<Vec<String>>,
    pub last_build_started_at: Option<i64>,
    pub last_build_finished_at: Option<i64>,
    pub last_checked_in: Option<i64>,
    pub build_limit: Option<i64>,
}
