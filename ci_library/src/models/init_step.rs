//! One phase of build initialization (clone, compile, plan).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitStep {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub init_id: Option<i64>,
    pub number: Option<i32>,
    pub reporter: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
}
