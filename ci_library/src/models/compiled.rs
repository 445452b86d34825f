//! A compiled pipeline artifact attached to a build.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compiled {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub pipeline_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}
