//! compiled: the fully rendered pipeline for a build, kept for inspection.

use ci_library::constants::TABLE_COMPILED;
use ci_library::models::compiled as library;
use diesel::prelude::*;

use crate::compression::{compress_field, decompress_field};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::compiled;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = compiled)]
pub struct Compiled {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub pipeline_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}

impl Compiled {
    pub fn from_library(compiled: library::Compiled) -> Self {
        let mut record = Self {
            id: compiled.id,
            build_id: compiled.build_id,
            pipeline_id: compiled.pipeline_id,
            data: compiled.data,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Compiled {
        library::Compiled {
            id: present(&self.id),
            build_id: present(&self.build_id),
            pipeline_id: present(&self.pipeline_id),
            data: present(&self.data),
        }
    }
}

impl Record for Compiled {
    const TABLE: &'static str = TABLE_COMPILED;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.pipeline_id);
        nullify(&mut self.data);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("compiled", "build_id"));
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
