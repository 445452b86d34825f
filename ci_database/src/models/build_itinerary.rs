//! build_itineraries: the planned execution graph recorded for one build.

use ci_library::constants::TABLE_BUILD_ITINERARY;
use ci_library::models::build_itinerary as library;
use diesel::prelude::*;

use crate::compression::{compress_field, decompress_field};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::schema::build_itineraries;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = build_itineraries)]
pub struct BuildItinerary {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}

impl BuildItinerary {
    pub fn from_library(itinerary: library::BuildItinerary) -> Self {
        let mut record = Self {
            id: itinerary.id,
            build_id: itinerary.build_id,
            data: itinerary.data,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::BuildItinerary {
        library::BuildItinerary {
            id: present(&self.id),
            build_id: present(&self.build_id),
            data: present(&self.data),
        }
    }
}

impl Record for BuildItinerary {
    const TABLE: &'static str = TABLE_BUILD_ITINERARY;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.build_id);
        nullify(&mut self.data);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("build itinerary", "build_id"));
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
