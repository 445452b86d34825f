//! A source repository enabled on the platform.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub hash: Option<String>,
    pub org: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub link: Option<String>,
    pub clone: Option<String>,
    pub branch: Option<String>,
    pub topics: Option<Vec<String>>,
    pub build_limit: Option<i64>,
    pub timeout: Option<i64>,
    pub counter: Option<i32>,
    pub visibility: Option<String>,
    pub private: Option<bool>,
    pub trusted: Option<bool>,
    pub active: Option<bool>,
    pub allow_pull: Option<bool>,
    pub allow_push: Option<bool>,
    pub allow_deploy: Option<bool>,
    pub allow_tag: Option<bool>,
    pub allow_comment: Option<bool>,
    pub pipeline_type: Option<String>,
    pub previous_name: Option<String>,
    pub approve_build: Option<String>,
}
