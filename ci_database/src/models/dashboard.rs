//! dashboards: a user-curated view over several repositories.
//!
//! Dashboards are keyed by UUID rather than a sequence, and carry their repo
//! list as a JSON document. Mapping to and from the library shape is
//! therefore fallible.

use ci_library::constants::{FAVORITES_MAX_SIZE, TABLE_DASHBOARD};
use ci_library::models::dashboard as library;
use diesel::prelude::*;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::dashboards;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = dashboards)]
pub struct Dashboard {
    #[diesel(deserialize_as = Uuid)]
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
    pub admins: Vec<String>,
    pub repos: Option<serde_json::Value>,
}

impl Dashboard {
    pub fn from_library(dashboard: library::Dashboard) -> Result<Self> {
        let id = match dashboard.id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                Uuid::parse_str(raw).map_err(|_| DatabaseError::invalid("dashboard", "id"))?,
            ),
        };
        let repos = dashboard
            .repos
            .map(serde_json::to_value)
            .transpose()?;

        let mut record = Self {
            id,
            name: dashboard.name,
            created_at: dashboard.created_at,
            created_by: dashboard.created_by,
            updated_at: dashboard.updated_at,
            updated_by: dashboard.updated_by,
            admins: dashboard.admins.unwrap_or_default(),
            repos,
        };
        record.nullify();
        Ok(record)
    }

    pub fn to_library(&self) -> Result<library::Dashboard> {
        let repos: Vec<library::DashboardRepo> = match &self.repos {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };

        Ok(library::Dashboard {
            id: Some(self.id.map(|id| id.to_string()).unwrap_or_default()),
            name: present(&self.name),
            created_at: present(&self.created_at),
            created_by: present(&self.created_by),
            updated_at: present(&self.updated_at),
            updated_by: present(&self.updated_by),
            admins: Some(self.admins.clone()),
            repos: Some(repos),
        })
    }
}

impl Record for Dashboard {
    const TABLE: &'static str = TABLE_DASHBOARD;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.name);
        nullify(&mut self.created_at);
        nullify(&mut self.created_by);
        nullify(&mut self.updated_at);
        nullify(&mut self.updated_by);
        if self.repos.as_ref().is_some_and(serde_json::Value::is_null) {
            self.repos = None;
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.name) {
            return Err(DatabaseError::empty("dashboard", "name"));
        }
        if joined_size(&self.admins) > FAVORITES_MAX_SIZE {
            return Err(DatabaseError::LimitExceeded {
                entity: "dashboard",
                field: "admins",
                limit: FAVORITES_MAX_SIZE,
            });
        }

        sanitize_field(&mut self.name);
        sanitize_field(&mut self.created_by);
        sanitize_field(&mut self.updated_by);
        Ok(())
    }
}

/// Size of `values` once comma-joined into a single text column.
pub(crate) fn joined_size(values: &[String]) -> usize {
    let total: usize = values.iter().map(String::len).sum();
    total + values.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> library::Dashboard {
        library::Dashboard {
            id: Some("c8da1302-07d6-11ea-882f-4893bca275b8".into()),
            name: Some("vela".into()),
            created_at: Some(1),
            created_by: Some("octocat".into()),
            updated_at: Some(2),
            updated_by: Some("octokitty".into()),
            admins: Some(vec!["octocat".into(), "octokitty".into()]),
            repos: Some(vec![library::DashboardRepo {
                id: Some(1),
                name: Some("go-vela/server".into()),
                branches: Some(vec!["main".into()]),
                events: Some(vec!["push".into(), "tag".into()]),
            }]),
        }
    }

    #[test]
    fn round_trip_through_json_repos() {
        let record = Dashboard::from_library(sample()).unwrap();
        assert!(record.id.is_some());
        assert!(record.repos.is_some());
        assert_eq!(record.to_library().unwrap(), sample());
    }

    #[test]
    fn malformed_id_is_rejected() {
        let mut dashboard = sample();
        dashboard.id = Some("not-a-uuid".into());
        assert!(matches!(
            Dashboard::from_library(dashboard),
            Err(DatabaseError::InvalidField { entity: "dashboard", field: "id" })
        ));
    }

    #[test]
    fn empty_id_is_null() {
        let mut dashboard = sample();
        dashboard.id = Some(String::new());
        let record = Dashboard::from_library(dashboard).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.to_library().unwrap().id.as_deref(), Some(""));
    }

    #[test]
    fn validate_bounds_admin_list() {
        let mut record = Dashboard::from_library(sample()).unwrap();
        record.validate().unwrap();

        // 1000 admins of 5 characters join to 5999 characters.
        record.admins = vec!["abcde".to_string(); 1000];
        assert!(matches!(
            record.validate(),
            Err(DatabaseError::LimitExceeded { field: "admins", .. })
        ));
    }

    #[test]
    fn joined_size_counts_separators() {
        assert_eq!(joined_size(&[]), 0);
        assert_eq!(joined_size(&["a".into()]), 1);
        assert_eq!(joined_size(&["ab".into(), "cd".into(), "e".into()]), 7);
    }
}
