//! services: a long-running sidecar container attached to a build.

use ci_library::constants::TABLE_SERVICE;
use ci_library::models::service as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::services;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = services)]
pub struct Service {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub exit_code: Option<i32>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
}

impl Service {
    pub fn from_library(service: library::Service) -> Self {
        let mut record = Self {
            id: service.id,
            build_id: service.build_id,
            repo_id: service.repo_id,
            number: service.number,
            name: service.name,
            image: service.image,
            status: service.status,
            error: service.error,
            exit_code: service.exit_code,
            created: service.created,
            started: service.started,
            finished: service.finished,
            host: service.host,
            runtime: service.runtime,
            distribution: service.distribution,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Service {
        library::Service {
            id: present(&self.id),
            build_id: present(&self.build_id),
            repo_id: present(&self.repo_id),
            number: present(&self.number),
            name: present(&self.name),
            image: present(&self.image),
            status: present(&self.status),
            error: present(&self.error),
            exit_code: present(&self.exit_code),
            created: present(&self.created),
            started: present(&self.started),
            finished: present(&self.finished),
            host: present(&self.host),
            runtime: present(&self.runtime),
            distribution: present(&self.distribution),
        }
    }
}

impl Record for Service {
    const TABLE: &'static str = TABLE_SERVICE;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.repo_id);
        nullify(&mut self.number);
        nullify(&mut self.name);
        nullify(&mut self.image);
        nullify(&mut self.status);
        nullify(&mut self.error);
        nullify(&mut self.exit_code);
        nullify(&mut self.created);
        nullify(&mut self.started);
        nullify(&mut self.finished);
        nullify(&mut self.host);
        nullify(&mut self.runtime);
        nullify(&mut self.distribution);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("service", "build_id"));
        }
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("service", "repo_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("service", "number"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("service", "name"));
        }
        Ok(())
    }
}
