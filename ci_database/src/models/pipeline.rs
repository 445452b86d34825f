//! pipelines: the pipeline configuration of a repository at a commit.

use ci_library::constants::TABLE_PIPELINE;
use ci_library::models::pipeline as library;
use diesel::prelude::*;

use crate::compression::{compress_field, decompress_field};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::pipelines;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = pipelines)]
pub struct Pipeline {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub commit: Option<String>,
    pub flavor: Option<String>,
    pub platform: Option<String>,
    pub reference: Option<String>,
    pub kind: Option<String>,
    pub version: Option<String>,
    pub external_secrets: Option<bool>,
    pub internal_secrets: Option<bool>,
    pub services: Option<bool>,
    pub stages: Option<bool>,
    pub steps: Option<bool>,
    pub templates: Option<bool>,
    pub data: Option<Vec<u8>>,
}

impl Pipeline {
    pub fn from_library(pipeline: library::Pipeline) -> Self {
        let mut record = Self {
            id: pipeline.id,
            repo_id: pipeline.repo_id,
            commit: pipeline.commit,
            flavor: pipeline.flavor,
            platform: pipeline.platform,
            reference: pipeline.reference,
            kind: pipeline.kind,
            version: pipeline.version,
            external_secrets: Some(pipeline.external_secrets.unwrap_or(false)),
            internal_secrets: Some(pipeline.internal_secrets.unwrap_or(false)),
            services: Some(pipeline.services.unwrap_or(false)),
            stages: Some(pipeline.stages.unwrap_or(false)),
            steps: Some(pipeline.steps.unwrap_or(false)),
            templates: Some(pipeline.templates.unwrap_or(false)),
            data: pipeline.data,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Pipeline {
        library::Pipeline {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            commit: present(&self.commit),
            flavor: present(&self.flavor),
            platform: present(&self.platform),
            reference: present(&self.reference),
            kind: present(&self.kind),
            version: present(&self.version),
            external_secrets: present(&self.external_secrets),
            internal_secrets: present(&self.internal_secrets),
            services: present(&self.services),
            stages: present(&self.stages),
            steps: present(&self.steps),
            templates: present(&self.templates),
            data: present(&self.data),
        }
    }

    fn text_fields_mut(&mut self) -> [&mut Option<String>; 6] {
        [
            &mut self.commit,
            &mut self.flavor,
            &mut self.platform,
            &mut self.reference,
            &mut self.kind,
            &mut self.version,
        ]
    }
}

impl Record for Pipeline {
    const TABLE: &'static str = TABLE_PIPELINE;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.data);
        for field in self.text_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("pipeline", "repo_id"));
        }
        if missing(&self.commit) {
            return Err(DatabaseError::empty("pipeline", "commit"));
        }
        if missing(&self.reference) {
            return Err(DatabaseError::empty("pipeline", "ref"));
        }
        if missing(&self.kind) {
            return Err(DatabaseError::empty("pipeline", "type"));
        }
        if missing(&self.version) {
            return Err(DatabaseError::empty("pipeline", "version"));
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
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
    use crate::record::{prepare, restore};

    fn sample() -> library::Pipeline {
        library::Pipeline {
            id: Some(1),
            repo_id: Some(1),
            commit: Some("48afb5bdc41ad69bf22588491333f7cf71135163".into()),
            flavor: Some("large".into()),
            platform: Some("docker".into()),
            reference: Some("refs/heads/main".into()),
            kind: Some("yaml".into()),
            version: Some("1".into()),
            external_secrets: Some(false),
            internal_secrets: Some(false),
            services: Some(true),
            stages: Some(false),
            steps: Some(true),
            templates: Some(false),
            data: Some(b"foo".to_vec()),
        }
    }

    #[test]
    fn booleans_survive_nullify() {
        let record = Pipeline::from_library(sample());
        assert_eq!(record.stages, Some(false));
        assert_eq!(record.services, Some(true));

        let unset = Pipeline::from_library(library::Pipeline::default());
        assert_eq!(unset.templates, Some(false));
    }

    #[test]
    fn round_trip() {
        assert_eq!(Pipeline::from_library(sample()).to_library(), sample());
    }

    #[test]
    fn stored_data_is_compressed_at_default_level() {
        let config = DatabaseConfig::new("C639A572E14D5075C526FDDD43E4ECF6")
            .with_compression_level(6);
        let mut record = Pipeline::from_library(sample());

        prepare(&mut record, &config).unwrap();
        assert_eq!(record.data.as_ref().map(|d| &d[..2]), Some(&[0x78, 0x9c][..]));

        restore(&mut record, &config).unwrap();
        assert_eq!(record.data.as_deref(), Some(&b"foo"[..]));
    }

    #[test]
    fn validate_reports_type_by_column_name() {
        let mut record = Pipeline::from_library(sample());
        record.kind = None;
        assert!(matches!(
            record.validate(),
            Err(DatabaseError::EmptyField { entity: "pipeline", field: "type" })
        ));
    }
}
