//! workers: a build agent registered with the server.

use ci_library::constants::TABLE_WORKER;
use ci_library::models::worker as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::workers;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = workers)]
pub struct Worker {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub address: Option<String>,
    pub routes: Vec<String>,
    pub active: Option<bool>,
    pub status: Option<String>,
    pub last_status_update_at: Option<i64>,
    pub running_build_ids: Vec<String>,
    pub last_build_started_at: Option<i64>,
    pub last_build_finished_at: Option<i64>,
    pub last_checked_in: Option<i64>,
    pub build_limit: Option<i64>,
}

impl Worker {
    pub fn from_library(worker: library::Worker) -> Self {
        let mut record = Self {
            id: worker.id,
            hostname: worker.hostname,
            address: worker.address,
            routes: worker.routes.unwrap_or_default(),
            active: Some(worker.active.unwrap_or(false)),
            status: worker.status,
            last_status_update_at: worker.last_status_update_at,
            running_build_ids: worker.running_build_ids.unwrap_or_default(),
            last_build_started_at: worker.last_build_started_at,
            last_build_finished_at: worker.last_build_finished_at,
            last_checked_in: worker.last_checked_in,
            build_limit: worker.build_limit,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Worker {
        library::Worker {
            id: present(&self.id),
            hostname: present(&self.hostname),
            address: present(&self.address),
            routes: Some(self.routes.clone()),
            active: present(&self.active),
            status: present(&self.status),
            last_status_update_at: present(&self.last_status_update_at),
            running_build_ids: Some(self.running_build_ids.clone()),
            last_build_started_at: present(&self.last_build_started_at),
            last_build_finished_at: present(&self.last_build_finished_at),
            last_checked_in: present(&self.last_checked_in),
            build_limit: present(&self.build_limit),
        }
    }
}

impl Record for Worker {
    const TABLE: &'static str = TABLE_WORKER;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.hostname);
        nullify(&mut self.address);
        nullify(&mut self.status);
        nullify(&mut self.last_status_update_at);
        nullify(&mut self.last_build_started_at);
        nullify(&mut self.last_build_finished_at);
        nullify(&mut self.last_checked_in);
        nullify(&mut self.build_limit);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.hostname) {
            return Err(DatabaseError::empty("worker", "hostname"));
        }
        if missing(&self.address) {
            return Err(DatabaseError::empty("worker", "address"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_routes() {
        let worker = library::Worker {
            id: Some(1),
            hostname: Some("worker_0".into()),
            address: Some("http://localhost:8080".into()),
            routes: Some(vec!["vela".into(), "large".into()]),
            active: Some(true),
            status: Some("available".into()),
            last_status_update_at: Some(1_563_474_077),
            running_build_ids: Some(Vec::new()),
            last_build_started_at: Some(1_563_474_077),
            last_build_finished_at: Some(1_563_474_077),
            last_checked_in: Some(1_563_474_077),
            build_limit: Some(2),
        };
        assert_eq!(Worker::from_library(worker.clone()).to_library(), worker);
    }

    #[test]
    fn validate_requires_address() {
        let mut worker = Worker {
            hostname: Some("worker_0".into()),
            ..Default::default()
        };
        assert!(matches!(
            worker.validate(),
            Err(DatabaseError::EmptyField { entity: "worker", field: "address" })
        ));
    }
}
