//! init_steps: one reported step inside an init phase.

use ci_library::constants::TABLE_INIT_STEP;
use ci_library::models::init_step as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::init_steps;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = init_steps)]
pub struct InitStep {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub init_id: Option<i64>,
    pub number: Option<i32>,
    pub reporter: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
}

impl InitStep {
    pub fn from_library(step: library::InitStep) -> Self {
        let mut record = Self {
            id: step.id,
            repo_id: step.repo_id,
            build_id: step.build_id,
            init_id: step.init_id,
            number: step.number,
            reporter: step.reporter,
            name: step.name,
            status: step.status,
            error: step.error,
            created: step.created,
            started: step.started,
            finished: step.finished,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::InitStep {
        library::InitStep {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            build_id: present(&self.build_id),
            init_id: present(&self.init_id),
            number: present(&self.number),
            reporter: present(&self.reporter),
            name: present(&self.name),
            status: present(&self.status),
            error: present(&self.error),
            created: present(&self.created),
            started: present(&self.started),
            finished: present(&self.finished),
        }
    }
}

impl Record for InitStep {
    const TABLE: &'static str = TABLE_INIT_STEP;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.build_id);
        nullify(&mut self.init_id);
        nullify(&mut self.number);
        nullify(&mut self.reporter);
        nullify(&mut self.name);
        nullify(&mut self.status);
        nullify(&mut self.error);
        nullify(&mut self.created);
        nullify(&mut self.started);
        nullify(&mut self.finished);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("init step", "repo_id"));
        }
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("init step", "build_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("init step", "number"));
        }
        if missing(&self.reporter) {
            return Err(DatabaseError::empty("init step", "reporter"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("init step", "name"));
        }

        sanitize_field(&mut self.reporter);
        sanitize_field(&mut self.name);
        sanitize_field(&mut self.status);
        sanitize_field(&mut self.error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_timestamps() {
        let step = library::InitStep {
            id: Some(1),
            repo_id: Some(1),
            build_id: Some(1),
            init_id: Some(1),
            number: Some(1),
            reporter: Some("Foobar Runtime".into()),
            name: Some("foobar".into()),
            status: Some("running".into()),
            error: Some(String::new()),
            created: Some(1_563_474_076),
            started: Some(1_563_474_078),
            finished: Some(1_563_474_079),
        };
        let record = InitStep::from_library(step.clone());
        assert_eq!(record.error, None);
        assert_eq!(record.to_library(), step);
    }

    #[test]
    fn validate_sanitizes_error() {
        let mut record = InitStep {
            repo_id: Some(1),
            build_id: Some(1),
            number: Some(1),
            reporter: Some("runtime".into()),
            name: Some("clone".into()),
            error: Some("<img src=x onerror=alert(1)>failed".into()),
            ..Default::default()
        };
        record.validate().unwrap();
        assert_eq!(record.error.as_deref(), Some("failed"));
    }
}
