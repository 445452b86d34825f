//! repos: a source repository enabled on the platform.

use ci_library::constants::TABLE_REPO;
use ci_library::models::repo as library;
use diesel::prelude::*;

use crate::config::DatabaseConfig;
use crate::crypto::{decrypt_field, encrypt_field};
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::repos;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = repos)]
pub struct Repo {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub hash: Option<String>,
    pub org: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub link: Option<String>,
    pub clone: Option<String>,
    pub branch: Option<String>,
    pub topics: Vec<String>,
    pub build_limit: Option<i64>,
    pub timeout: Option<i64>,
    pub counter: Option<i32>,
    pub visibility: Option<String>,
    pub private: Option<bool>,
    pub trusted: Option<bool>,
    pub active: Option<bool>,
    pub allow_pull: Option<bool>,
    pub allow_push: Option<bool>,
    pub allow_deploy: Option<bool>,
    pub allow_tag: Option<bool>,
    pub allow_comment: Option<bool>,
    pub pipeline_type: Option<String>,
    pub previous_name: Option<String>,
    pub approve_build: Option<String>,
}

impl Repo {
    pub fn from_library(repo: library::Repo) -> Self {
        let mut record = Self {
            id: repo.id,
            user_id: repo.user_id,
            hash: repo.hash,
            org: repo.org,
            name: repo.name,
            full_name: repo.full_name,
            link: repo.link,
            clone: repo.clone,
            branch: repo.branch,
            topics: repo.topics.unwrap_or_default(),
            build_limit: repo.build_limit,
            timeout: repo.timeout,
            counter: repo.counter,
            visibility: repo.visibility,
            private: Some(repo.private.unwrap_or(false)),
            trusted: Some(repo.trusted.unwrap_or(false)),
            active: Some(repo.active.unwrap_or(false)),
            allow_pull: Some(repo.allow_pull.unwrap_or(false)),
            allow_push: Some(repo.allow_push.unwrap_or(false)),
            allow_deploy: Some(repo.allow_deploy.unwrap_or(false)),
            allow_tag: Some(repo.allow_tag.unwrap_or(false)),
            allow_comment: Some(repo.allow_comment.unwrap_or(false)),
            pipeline_type: repo.pipeline_type,
            previous_name: repo.previous_name,
            approve_build: repo.approve_build,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Repo {
        library::Repo {
            id: present(&self.id),
            user_id: present(&self.user_id),
            hash: present(&self.hash),
            org: present(&self.org),
            name: present(&self.name),
            full_name: present(&self.full_name),
            link: present(&self.link),
            clone: present(&self.clone),
            branch: present(&self.branch),
            topics: Some(self.topics.clone()),
            build_limit: present(&self.build_limit),
            timeout: present(&self.timeout),
            counter: present(&self.counter),
            visibility: present(&self.visibility),
            private: present(&self.private),
            trusted: present(&self.trusted),
            active: present(&self.active),
            allow_pull: present(&self.allow_pull),
            allow_push: present(&self.allow_push),
            allow_deploy: present(&self.allow_deploy),
            allow_tag: present(&self.allow_tag),
            allow_comment: present(&self.allow_comment),
            pipeline_type: present(&self.pipeline_type),
            previous_name: present(&self.previous_name),
            approve_build: present(&self.approve_build),
        }
    }

    /// Text columns shown in API responses. The hash is excluded.
    fn text_fields_mut(&mut self) -> [&mut Option<String>; 10] {
        [
            &mut self.org,
            &mut self.name,
            &mut self.full_name,
            &mut self.link,
            &mut self.clone,
            &mut self.branch,
            &mut self.visibility,
            &mut self.pipeline_type,
            &mut self.previous_name,
            &mut self.approve_build,
        ]
    }
}

impl Record for Repo {
    const TABLE: &'static str = TABLE_REPO;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.user_id);
        nullify(&mut self.hash);
        nullify(&mut self.build_limit);
        nullify(&mut self.timeout);
        nullify(&mut self.counter);
        for field in self.text_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.user_id) {
            return Err(DatabaseError::empty("repo", "user_id"));
        }
        if missing(&self.hash) {
            return Err(DatabaseError::empty("repo", "hash"));
        }
        if missing(&self.org) {
            return Err(DatabaseError::empty("repo", "org"));
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("repo", "name"));
        }
        if missing(&self.full_name) {
            return Err(DatabaseError::empty("repo", "full_name"));
        }
        if missing(&self.visibility) {
            return Err(DatabaseError::empty("repo", "visibility"));
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
        }
        for topic in &mut self.topics {
            *topic = crate::sanitize::sanitize(topic);
        }
        Ok(())
    }

    fn seal(&mut self, config: &DatabaseConfig) -> Result<()> {
        encrypt_field(&config.encryption_key, &mut self.hash)
    }

    fn unseal(&mut self, config: &DatabaseConfig) -> Result<()> {
        decrypt_field(&config.encryption_key, &mut self.hash)
    }
}
