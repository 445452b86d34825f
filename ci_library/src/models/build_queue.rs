//! A pending build as listed by the queue endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildQueue {
    pub status: Option<String>,
    pub number: Option<i32>,
    pub created: Option<i64>,
    pub full_name: Option<String>,
}
