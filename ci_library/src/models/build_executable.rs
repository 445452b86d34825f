//! The compiled pipeline a worker will execute for a build.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildExecutable {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}
