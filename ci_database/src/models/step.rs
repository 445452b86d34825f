//! steps: one container executed as part of a build.

use ci_library::constants::TABLE_STEP;
use ci_library::models::step as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::steps;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = steps)]
pub struct Step {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub stage: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub exit_code: Option<i32>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
    pub report_as: Option<String>,
}

impl Step {
    pub fn from_library(step: library::Step) -> Self {
        let mut record = Self {
            id: step.id,
            build_id: step.build_id,
            repo_id: step.repo_id,
            number: step.number,
            name: step.name,
            image: step.image,
            stage: step.stage,
            status: step.status,
            error: step.error,
            exit_code: step.exit_code,
            created: step.created,
            started: step.started,
            finished: step.finished,
            host: step.host,
            runtime: step.runtime,
            distribution: step.distribution,
            report_as: step.report_as,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Step {
        library::Step {
            id: present(&self.id),
            build_id: present(&self.build_id),
            repo_id: present(&self.repo_id),
            number: present(&self.number),
            name: present(&self.name),
            image: present(&self.image),
            stage: present(&self.stage),
            status: present(&self.status),
            error: present(&self.error),
            exit_code: present(&self.exit_code),
            created: present(&self.created),
            started: present(&self.started),
            finished: present(&self.finished),
            host: present(&self.host),
            runtime: present(&self.runtime),
            distribution: present(&self.distribution),
            report_as: present(&self.report_as),
        }
    }
}

impl Record for Step {
    const TABLE: &'static str = TABLE_STEP;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.repo_id);
        nullify(&mut self.number);
        nullify(&mut self.name);
        nullify(&mut self.image);
        nullify(&mut self.stage);
        nullify(&mut self.status);
        nullify(&mut self.error);
        nullify(&mut self.exit_code);
        nullify(&mut self.created);
        nullify(&mut self.started);
        nullify(&mut self.finished);
        nullify(&mut self.host);
        nullify(&mut self.runtime);
        nullify(&mut self.distribution);
        nullify(&mut self.report_as);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("step", "build_id"));
        }
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("step", "repo_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("step", "number"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("step", "name"));
        }
        if missing(&self.image) {
            return Err(DatabaseError::empty("step", "image"));
        }
        Ok(())
    }
}
