//! logs: captured output of a step, service or init phase.

use ci_library::constants::TABLE_LOG;
use ci_library::models::log as library;
use diesel::prelude::*;

use crate::compression::{compress_field, decompress_field};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::logs;

const OWNER: &str = "step_id/service_id/init_id";

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = logs)]
pub struct Log {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub service_id: Option<i64>,
    pub step_id: Option<i64>,
    pub init_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}

impl Log {
    pub fn from_library(log: library::Log) -> Self {
        let mut record = Self {
            id: log.id,
            build_id: log.build_id,
            repo_id: log.repo_id,
            service_id: log.service_id,
            step_id: log.step_id,
            init_id: log.init_id,
            data: log.data,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Log {
        library::Log {
            id: present(&self.id),
            build_id: present(&self.build_id),
            repo_id: present(&self.repo_id),
            service_id: present(&self.service_id),
            step_id: present(&self.step_id),
            init_id: present(&self.init_id),
            data: present(&self.data),
        }
    }
}

impl Record for Log {
    const TABLE: &'static str = TABLE_LOG;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.repo_id);
        nullify(&mut self.service_id);
        nullify(&mut self.step_id);
        nullify(&mut self.init_id);
        nullify(&mut self.data);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("log", "build_id"));
        }
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("log", "repo_id"));
        }

        let owners = [&self.step_id, &self.service_id, &self.init_id]
            .into_iter()
            .filter(|owner| !missing(owner))
            .count();
        match owners {
            0 => Err(DatabaseError::empty("log", OWNER)),
            1 => Ok(()),
            _ => Err(DatabaseError::invalid("log", OWNER)),
        }
    }

    fn seal(&mut self, config: &DatabaseConfig) -> Result<()> {
        compress_field(config.compression_level, &mut self.data)
    }

    fn unseal(&mut self, _config: &DatabaseConfig) -> Result<()> {
        decompress_field(&mut self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned_by_step() -> Log {
        Log {
            id: Some(1),
            build_id: Some(1),
            repo_id: Some(1),
            step_id: Some(1),
            data: Some(b"foo".to_vec()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_requires_exactly_one_owner() {
        let mut log = owned_by_step();
        log.validate().unwrap();

        log.service_id = Some(2);
        assert!(matches!(
            log.validate(),
            Err(DatabaseError::InvalidField { entity: "log", .. })
        ));

        log.service_id = None;
        log.step_id = None;
        assert!(matches!(
            log.validate(),
            Err(DatabaseError::EmptyField { entity: "log", .. })
        ));

        log.init_id = Some(3);
        log.validate().unwrap();
    }

    #[test]
    fn masked_library_output_survives_storage() {
        let mut output = owned_by_step().to_library();
        output.append_data(b" token=s3cr3t");
        output.mask_data(&["s3cr3t".to_string()]);

        let config = DatabaseConfig::new("C639A572E14D5075C526FDDD43E4ECF6");
        let mut log = Log::from_library(output);
        log.seal(&config).unwrap();
        log.unseal(&config).unwrap();
        assert_eq!(log.data.as_deref(), Some(&b"foo token=***"[..]));
    }
}
