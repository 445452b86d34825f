//! hooks: a webhook delivery received from the SCM.

use ci_library::constants::TABLE_HOOK;
use ci_library::models::hook as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::hooks;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = hooks)]
pub struct Hook {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub build_id: Option<i64>,
    pub number: Option<i32>,
    pub source_id: Option<String>,
    pub created: Option<i64>,
    pub host: Option<String>,
    pub event: Option<String>,
    pub event_action: Option<String>,
    pub branch: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub link: Option<String>,
    pub webhook_id: Option<i64>,
}

impl Hook {
    pub fn from_library(hook: library::Hook) -> Self {
        let mut record = Self {
            id: hook.id,
            repo_id: hook.repo_id,
            build_id: hook.build_id,
            number: hook.number,
            source_id: hook.source_id,
            created: hook.created,
            host: hook.host,
            event: hook.event,
            event_action: hook.event_action,
            branch: hook.branch,
            error: hook.error,
            status: hook.status,
            link: hook.link,
            webhook_id: hook.webhook_id,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Hook {
        library::Hook {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            build_id: present(&self.build_id),
            number: present(&self.number),
            source_id: present(&self.source_id),
            created: present(&self.created),
            host: present(&self.host),
            event: present(&self.event),
            event_action: present(&self.event_action),
            branch: present(&self.branch),
            error: present(&self.error),
            status: present(&self.status),
            link: present(&self.link),
            webhook_id: present(&self.webhook_id),
        }
    }

    fn text_fields_mut(&mut self) -> [&mut Option<String>; 8] {
        [
            &mut self.source_id,
            &mut self.host,
            &mut self.event,
            &mut self.event_action,
            &mut self.branch,
            &mut self.error,
            &mut self.status,
            &mut self.link,
        ]
    }
}

impl Record for Hook {
    const TABLE: &'static str = TABLE_HOOK;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.build_id);
        nullify(&mut self.number);
        nullify(&mut self.created);
        nullify(&mut self.webhook_id);
        for field in self.text_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("hook", "repo_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("hook", "number"));
        }
        if missing(&self.source_id) {
            return Err(DatabaseError::empty("hook", "source_id"));
        }
        if missing(&self.webhook_id) {
            return Err(DatabaseError::empty("hook", "webhook_id"));
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hook {
        Hook {
            id: Some(1),
            repo_id: Some(1),
            build_id: Some(1),
            number: Some(1),
            source_id: Some("c8da1302-07d6-11ea-882f-4893bca275b8".into()),
            created: Some(1_563_474_077),
            host: Some("github.com".into()),
            event: Some("push".into()),
            branch: Some("main".into()),
            status: Some("success".into()),
            link: Some("https://github.com/github/octocat/settings/hooks/1".into()),
            webhook_id: Some(123_456),
            ..Default::default()
        }
    }

    #[test]
    fn validate_checks_required_fields_in_order() {
        let mut hook = sample();
        hook.validate().unwrap();

        hook.webhook_id = None;
        assert!(matches!(
            hook.validate(),
            Err(DatabaseError::EmptyField { field: "webhook_id", .. })
        ));

        hook.source_id = None;
        assert!(matches!(
            hook.validate(),
            Err(DatabaseError::EmptyField { field: "source_id", .. })
        ));
    }

    #[test]
    fn round_trip() {
        let hook = sample();
        assert_eq!(Hook::from_library(hook.to_library()), hook);
    }
}
