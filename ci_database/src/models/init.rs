//! inits: a pre-step phase of a build (clone, compile, secrets) that
//! reports its own output.

use ci_library::constants::TABLE_INIT;
use ci_library::models::init as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::inits;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = inits)]
pub struct Init {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub number: Option<i32>,
    pub reporter: Option<String>,
    pub name: Option<String>,
    pub mimetype: Option<String>,
}

impl Init {
    pub fn from_library(init: library::Init) -> Self {
        let mut record = Self {
            id: init.id,
            repo_id: init.repo_id,
            build_id: init.build_id,
            number: init.number,
            reporter: init.reporter,
            name: init.name,
            mimetype: init.mimetype,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Init {
        library::Init {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            build_id: present(&self.build_id),
            number: present(&self.number),
            reporter: present(&self.reporter),
            name: present(&self.name),
            mimetype: present(&self.mimetype),
        }
    }
}

impl Record for Init {
    const TABLE: &'static str = TABLE_INIT;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.build_id);
        nullify(&mut self.number);
        nullify(&mut self.reporter);
        nullify(&mut self.name);
        nullify(&mut self.mimetype);
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("init", "repo_id"));
        }
        if missing(&self.build_id) {
            return Err(DatabaseError::empty("init", "build_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("init", "number"));
        }
        if missing(&self.reporter) {
            return Err(DatabaseError::empty("init", "reporter"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("init", "name"));
        }

        sanitize_field(&mut self.reporter);
        sanitize_field(&mut self.name);
        sanitize_field(&mut self.mimetype);
        Ok(())
    }
}
