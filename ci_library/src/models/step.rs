//! A single container step executed within a build.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub stage: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub exit_code: Option<i32>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
    pub report_as: Option<String>,
}
