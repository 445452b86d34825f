//! Build queue: pending builds joined with their repository name.
//!
//! Not a table: rows come from [`QUEUED_BUILDS_SQL`] through
//! `diesel::sql_query`.

use ci_library::models::build_queue as library;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text};

use crate::null::{nullify, present};

/// Pending builds for a set of repo ids (`$1`, bigint array), oldest first.
pub const QUEUED_BUILDS_SQL: &str = "\
SELECT builds.status, builds.number, builds.created, repos.full_name \
FROM builds INNER JOIN repos ON builds.repo_id = repos.id \
WHERE builds.status = 'pending' AND builds.repo_id = ANY($1) \
ORDER BY builds.created ASC";

#[derive(Debug, Clone, Default, PartialEq, QueryableByName)]
pub struct BuildQueue {
    #[diesel(sql_type = Nullable<Text>)]
    pub status: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub number: Option<i32>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub created: Option<i64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub full_name: Option<String>,
}

impl BuildQueue {
    pub fn from_library(queued: library::BuildQueue) -> Self {
        let mut record = Self {
            status: queued.status,
            number: queued.number,
            created: queued.created,
            full_name: queued.full_name,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::BuildQueue {
        library::BuildQueue {
            status: present(&self.status),
            number: present(&self.number),
            created: present(&self.created),
            full_name: present(&self.full_name),
        }
    }

    pub fn nullify(&mut self) {
        nullify(&mut self.status);
        nullify(&mut self.number);
        nullify(&mut self.created);
        nullify(&mut self.full_name);
    }
}
