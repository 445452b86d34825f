//! Initialization output reported before steps run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Init {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub number: Option<i32>,
    pub reporter: Option<String>,
    pub name: Option<String>,
    pub mimetype: Option<String>,
}
