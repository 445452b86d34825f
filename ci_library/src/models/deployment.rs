//! A deployment request against a repository target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i64>,
    pub url: Option<String>,
    pub commit: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub task: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>,
    pub payload: Option<BTreeMap<String, String>>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub builds: Option<Vec<i64>>,
}
