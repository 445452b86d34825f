//! A detached service container running alongside a build.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub exit_code: Option<i32>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
}
