//! A pipeline configuration stored for a repository commit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub commit: Option<String>,
    pub flavor: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub version: Option<String>,
    pub external_secrets: Option<bool>,
    pub internal_secrets: Option<bool>,
    pub services: Option<bool>,
    pub stages: Option<bool>,
    pub steps: Option<bool>,
    pub templates: Option<bool>,
    pub data: Option<Vec<u8>>,
}
