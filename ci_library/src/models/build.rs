//! A single run of a pipeline against a repository commit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub pipeline_id: Option<i64>,
    pub number: Option<i32>,
    pub parent: Option<i32>,
    pub event: Option<String>,
    pub event_action: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub enqueued: Option<i64>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub deploy: Option<String>,
    pub deploy_number: Option<i64>,
    pub clone: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub commit: Option<String>,
    pub sender: Option<String>,
    pub sender_scm_id: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub link: Option<String>,
    pub branch: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub base_ref: Option<String>,
    pub head_ref: Option<String>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
    pub approved_at: Option<i64>,
    pub approved_by: Option<String>,
}

impl Build {
    /// Wall-clock seconds between start and finish, when both are known.
    pub fn duration(&self) -> Option<i64> {
        match (self.started, self.finished) {
            (Some(started), Some(finished)) if started > 0 && finished >= started => {
                Some(finished - started)
            }
            _ => None,
        }
    }
}
