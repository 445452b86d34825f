//! A platform user authenticated through the SCM.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub refresh_token: Option<String>,
    pub token: Option<String>,
    pub hash: Option<String>,
    pub favorites: Option<Vec<String>>,
    pub active: Option<bool>,
    pub admin: Option<bool>,
    pub dashboards: Option<Vec<String>>,
}

impl User {
    /// Copy with credentials stripped, for responses.
    pub fn sanitized(&self) -> Self {
        Self {
            refresh_token: None,
            token: None,
            hash: None,
            ..self.clone()
        }
    }
}
