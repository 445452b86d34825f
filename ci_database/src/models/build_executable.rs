//! build_executables: the compiled pipeline handed to a worker for one build.

use ci_library::constants::TABLE_BUILD_EXECUTABLE;
use ci_library::models::build_executable as library;
use diesel::prelude::*;

use crate::compression::{compress_field, decompress_field};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::build_executables;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = build_executables)]
pub struct BuildExecutable {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}

impl BuildExecutable {
    pub fn from_library(executable: library::BuildExecutable) -> Self {
        let mut record = Self {
            id: executable.id,
            build_id: executable.build_id,
            data: executable.data,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::BuildExecutable {
        library::BuildExecutable {
            id: present(&self.id),
            build_id: present(&self.build_id),
            data: present(&self.data),
        }
    }
}

impl Record for BuildExecutable {
    const TABLE: &'static str = TABLE_BUILD_EXECUTABLE;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.data);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("build executable", "build_id"));
        }
        Ok(())
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

    #[test]
    fn validate_requires_build_id() {
        let mut executable = BuildExecutable::default();
        assert!(matches!(
            executable.validate(),
            Err(DatabaseError::EmptyField { field: "build_id", .. })
        ));
    }

    #[test]
    fn seal_and_unseal_round_trip_data() {
        let config = DatabaseConfig::new("C639A572E14D5075C526FDDD43E4ECF6");
        let mut executable = BuildExecutable {
            id: Some(1),
            build_id: Some(1),
            data: Some(b"version: 1\nsteps: []\n".to_vec()),
        };

        executable.seal(&config).unwrap();
        assert_ne!(executable.data.as_deref(), Some(&b"version: 1\nsteps: []\n"[..]));

        executable.unseal(&config).unwrap();
        assert_eq!(executable.data.as_deref(), Some(&b"version: 1\nsteps: []\n"[..]));
    }
}
