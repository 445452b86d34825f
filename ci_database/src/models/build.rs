//! builds: a single run of a pipeline against a repository commit.

use ci_library::constants::{
    BUILD_ERROR_LENGTH, BUILD_MESSAGE_LENGTH, BUILD_TITLE_LENGTH, TABLE_BUILD,
};
use ci_library::models::build as library;
use diesel::prelude::*;

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::builds;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = builds)]
pub struct Build {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub pipeline_id: Option<i64>,
    pub number: Option<i32>,
    pub parent: Option<i32>,
    pub event: Option<String>,
    pub event_action: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub enqueued: Option<i64>,
    pub created: Option<i64>,
    pub started: Option<i64>,
    pub finished: Option<i64>,
    pub deploy: Option<String>,
    pub deploy_number: Option<i64>,
    pub clone: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub commit: Option<String>,
    pub sender: Option<String>,
    pub sender_scm_id: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub link: Option<String>,
    pub branch: Option<String>,
    pub reference: Option<String>,
    pub base_ref: Option<String>,
    pub head_ref: Option<String>,
    pub host: Option<String>,
    pub runtime: Option<String>,
    pub distribution: Option<String>,
    pub approved_at: Option<i64>,
    pub approved_by: Option<String>,
}

impl Build {
    pub fn from_library(build: library::Build) -> Self {
        let mut record = Self {
            id: build.id,
            repo_id: build.repo_id,
            pipeline_id: build.pipeline_id,
            number: build.number,
            parent: build.parent,
            event: build.event,
            event_action: build.event_action,
            status: build.status,
            error: build.error,
            enqueued: build.enqueued,
            created: build.created,
            started: build.started,
            finished: build.finished,
            deploy: build.deploy,
            deploy_number: build.deploy_number,
            clone: build.clone,
            source: build.source,
            title: build.title,
            message: build.message,
            commit: build.commit,
            sender: build.sender,
            sender_scm_id: build.sender_scm_id,
            author: build.author,
            email: build.email,
            link: build.link,
            branch: build.branch,
            reference: build.reference,
            base_ref: build.base_ref,
            head_ref: build.head_ref,
            host: build.host,
            runtime: build.runtime,
            distribution: build.distribution,
            approved_at: build.approved_at,
            approved_by: build.approved_by,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Build {
        library::Build {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            pipeline_id: present(&self.pipeline_id),
            number: present(&self.number),
            parent: present(&self.parent),
            event: present(&self.event),
            event_action: present(&self.event_action),
            status: present(&self.status),
            error: present(&self.error),
            enqueued: present(&self.enqueued),
            created: present(&self.created),
            started: present(&self.started),
            finished: present(&self.finished),
            deploy: present(&self.deploy),
            deploy_number: present(&self.deploy_number),
            clone: present(&self.clone),
            source: present(&self.source),
            title: present(&self.title),
            message: present(&self.message),
            commit: present(&self.commit),
            sender: present(&self.sender),
            sender_scm_id: present(&self.sender_scm_id),
            author: present(&self.author),
            email: present(&self.email),
            link: present(&self.link),
            branch: present(&self.branch),
            reference: present(&self.reference),
            base_ref: present(&self.base_ref),
            head_ref: present(&self.head_ref),
            host: present(&self.host),
            runtime: present(&self.runtime),
            distribution: present(&self.distribution),
            approved_at: present(&self.approved_at),
            approved_by: present(&self.approved_by),
        }
    }

    fn text_fields_mut(&mut self) -> [&mut Option<String>; 23] {
        [
            &mut self.event,
            &mut self.event_action,
            &mut self.status,
            &mut self.error,
            &mut self.deploy,
            &mut self.clone,
            &mut self.source,
            &mut self.title,
            &mut self.message,
            &mut self.commit,
            &mut self.sender,
            &mut self.sender_scm_id,
            &mut self.author,
            &mut self.email,
            &mut self.link,
            &mut self.branch,
            &mut self.reference,
            &mut self.base_ref,
            &mut self.head_ref,
            &mut self.host,
            &mut self.runtime,
            &mut self.distribution,
            &mut self.approved_by,
        ]
    }
}

impl Record for Build {
    const TABLE: &'static str = TABLE_BUILD;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.pipeline_id);
        nullify(&mut self.number);
        nullify(&mut self.parent);
        nullify(&mut self.enqueued);
        nullify(&mut self.created);
        nullify(&mut self.started);
        nullify(&mut self.finished);
        nullify(&mut self.deploy_number);
        nullify(&mut self.approved_at);
        for field in self.text_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("build", "repo_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("build", "number"));
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
        }
        Ok(())
    }

    fn crop(&mut self) {
        if let Some(title) = self.title.as_mut() {
            truncate_head(title, BUILD_TITLE_LENGTH);
        }
        if let Some(message) = self.message.as_mut() {
            truncate_head(message, BUILD_MESSAGE_LENGTH);
        }
        if let Some(error) = self.error.as_mut() {
            truncate_middle(error, BUILD_ERROR_LENGTH);
        }
    }
}

/// Keep the first `limit` characters.
fn truncate_head(value: &mut String, limit: usize) {
    if let Some((offset, _)) = value.char_indices().nth(limit) {
        value.truncate(offset);
    }
}

/// Keep the first `ceil(limit / 2)` and last `floor(limit / 2)` characters.
fn truncate_middle(value: &mut String, limit: usize) {
    let length = value.chars().count();
    if length <= limit {
        return;
    }

    let head = limit.div_ceil(2);
    let tail = limit / 2;
    let cropped: String = value
        .chars()
        .take(head)
        .chain(value.chars().skip(length - tail))
        .collect();
    *value = cropped;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> library::Build {
        library::Build {
            id: Some(1),
            repo_id: Some(1),
            number: Some(1),
            parent: Some(0),
            event: Some("push".into()),
            status: Some("running".into()),
            error: Some(String::new()),
            enqueued: Some(1_563_474_077),
            created: Some(1_563_474_076),
            started: Some(1_563_474_078),
            finished: Some(0),
            title: Some("push received from https://github.com/github/octocat".into()),
            message: Some("First commit...".into()),
            commit: Some("48afb5bdc41ad69bf22588491333f7cf71135163".into()),
            sender: Some("OctoKitty".into()),
            author: Some("OctoKitty".into()),
            branch: Some("main".into()),
            reference: Some("refs/heads/main".into()),
            ..Default::default()
        }
    }

    #[test]
    fn from_library_nullifies_zero_values() {
        let build = Build::from_library(sample());
        assert_eq!(build.parent, None);
        assert_eq!(build.error, None);
        assert_eq!(build.finished, None);
        assert_eq!(build.sender.as_deref(), Some("OctoKitty"));
    }

    #[test]
    fn to_library_exports_nulls_as_zero_values() {
        let exported = Build::from_library(sample()).to_library();
        assert_eq!(exported.parent, Some(0));
        assert_eq!(exported.error.as_deref(), Some(""));
        assert_eq!(exported.deploy_number, Some(0));
        assert_eq!(exported.branch.as_deref(), Some("main"));
    }

    #[test]
    fn validate_requires_repo_and_number() {
        let mut build = Build::from_library(sample());
        build.number = None;
        assert!(matches!(
            build.validate(),
            Err(DatabaseError::EmptyField { entity: "build", field: "number" })
        ));

        build.number = Some(1);
        build.repo_id = None;
        assert!(matches!(
            build.validate(),
            Err(DatabaseError::EmptyField { entity: "build", field: "repo_id" })
        ));
    }

    #[test]
    fn validate_strips_markup() {
        let mut build = Build::from_library(sample());
        build.message = Some("<script>alert(1)</script>fixed it".into());
        build.title = Some("R&D <b>update</b>".into());
        build.author = Some("Mike & Ike".into());
        build.validate().unwrap();
        assert_eq!(build.message.as_deref(), Some("fixed it"));
        assert_eq!(build.title.as_deref(), Some("R&amp;D update"));
        assert_eq!(build.author.as_deref(), Some("Mike & Ike"));
    }

    #[test]
    fn crop_truncates_title_and_message() {
        let mut build = Build {
            title: Some("t".repeat(BUILD_TITLE_LENGTH + 10)),
            message: Some("m".repeat(BUILD_MESSAGE_LENGTH + 10)),
            ..Default::default()
        };
        build.crop();
        assert_eq!(build.title.as_ref().map(String::len), Some(BUILD_TITLE_LENGTH));
        assert_eq!(build.message.as_ref().map(String::len), Some(BUILD_MESSAGE_LENGTH));
    }

    #[test]
    fn crop_keeps_error_head_and_tail() {
        let original = format!("{}{}{}", "A".repeat(125), "B".repeat(500), "C".repeat(125));
        let mut build = Build {
            error: Some(original.clone()),
            ..Default::default()
        };
        build.crop();

        let expected = format!("{}{}", &original[..250], &original[original.len() - 250..]);
        assert_eq!(build.error, Some(expected));
        assert_eq!(build.error.as_ref().map(String::len), Some(BUILD_ERROR_LENGTH));
    }

    #[test]
    fn crop_counts_characters() {
        let mut title = "é".repeat(BUILD_TITLE_LENGTH + 1);
        truncate_head(&mut title, BUILD_TITLE_LENGTH);
        assert_eq!(title.chars().count(), BUILD_TITLE_LENGTH);

        let mut short = "ü".repeat(10);
        truncate_middle(&mut short, 4);
        assert_eq!(short, "üüüü");
    }
}
