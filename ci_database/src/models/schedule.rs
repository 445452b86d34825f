//! schedules: a cron-triggered build definition for a repository.

use std::str::FromStr;

use ci_library::constants::TABLE_SCHEDULE;
use ci_library::models::schedule as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::schedules;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = schedules)]
pub struct Schedule {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub active: Option<bool>,
    pub name: Option<String>,
    pub entry: Option<String>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
    pub scheduled_at: Option<i64>,
    pub branch: Option<String>,
    pub error: Option<String>,
}

impl Schedule {
    pub fn from_library(schedule: library::Schedule) -> Self {
        let mut record = Self {
            id: schedule.id,
            repo_id: schedule.repo_id,
            active: Some(schedule.active.unwrap_or(false)),
            name: schedule.name,
            entry: schedule.entry,
            created_at: schedule.created_at,
            created_by: schedule.created_by,
            updated_at: schedule.updated_at,
            updated_by: schedule.updated_by,
            scheduled_at: schedule.scheduled_at,
            branch: schedule.branch,
            error: schedule.error,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Schedule {
        library::Schedule {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            active: present(&self.active),
            name: present(&self.name),
            entry: present(&self.entry),
            created_at: present(&self.created_at),
            created_by: present(&self.created_by),
            updated_at: present(&self.updated_at),
            updated_by: present(&self.updated_by),
            scheduled_at: present(&self.scheduled_at),
            branch: present(&self.branch),
            error: present(&self.error),
        }
    }

    fn text_fields_mut(&mut self) -> [&mut Option<String>; 6] {
        [
            &mut self.name,
            &mut self.entry,
            &mut self.created_by,
            &mut self.updated_by,
            &mut self.branch,
            &mut self.error,
        ]
    }
}

impl Record for Schedule {
    const TABLE: &'static str = TABLE_SCHEDULE;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.created_at);
        nullify(&mut self.updated_at);
        nullify(&mut self.scheduled_at);
        for field in self.text_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("schedule", "repo_id"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("schedule", "name"));
        }
        match self.entry.as_deref() {
            None | Some("") => return Err(DatabaseError::empty("schedule", "entry")),
            Some(entry) => {
                parse_entry(entry)?;
            }
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
        }
        Ok(())
    }
}

/// Parse a schedule entry.
///
/// Accepts the five-field crontab form (minute, hour, day of month, month,
/// day of week) and `@` shorthands such as `@hourly`. Five-field entries are
/// pinned to second zero.
pub fn parse_entry(entry: &str) -> Result<cron::Schedule> {
    let entry = entry.trim();
    let parsed = if entry.starts_with('@') || entry.split_whitespace().count() != 5 {
        cron::Schedule::from_str(entry)
    } else {
        cron::Schedule::from_str(&format!("0 {entry}"))
    };

    parsed.map_err(|err| {
        tracing::debug!(entry, error = %err, "rejecting schedule entry");
        DatabaseError::invalid("schedule", "entry")
    })
}
