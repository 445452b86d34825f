//! The planned route of a build through stages and steps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildItinerary {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}
