//! deployments: a request to deploy a ref to a target environment.

use std::collections::BTreeMap;

use ci_library::constants::TABLE_DEPLOYMENT;
use ci_library::models::deployment as library;
use diesel::prelude::*;
use serde_json::{Map, Value};

use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize_field;
use crate::schema::deployments;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = deployments)]
pub struct Deployment {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    pub number: Option<i64>,
    pub url: Option<String>,
    pub commit: Option<String>,
    pub reference: Option<String>,
    pub task: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>,
    pub payload: Option<Value>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub builds: Vec<i64>,
}

impl Deployment {
    pub fn from_library(deployment: library::Deployment) -> Self {
        let mut record = Self {
            id: deployment.id,
            repo_id: deployment.repo_id,
            number: deployment.number,
            url: deployment.url,
            commit: deployment.commit,
            reference: deployment.reference,
            task: deployment.task,
            target: deployment.target,
            description: deployment.description,
            payload: deployment.payload.map(payload_to_json),
            created_at: deployment.created_at,
            created_by: deployment.created_by,
            builds: deployment.builds.unwrap_or_default(),
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Deployment {
        library::Deployment {
            id: present(&self.id),
            repo_id: present(&self.repo_id),
            number: present(&self.number),
            url: present(&self.url),
            commit: present(&self.commit),
            reference: present(&self.reference),
            task: present(&self.task),
            target: present(&self.target),
            description: present(&self.description),
            payload: Some(self.payload.as_ref().map(payload_from_json).unwrap_or_default()),
            created_at: present(&self.created_at),
            created_by: present(&self.created_by),
            builds: Some(self.builds.clone()),
        }
    }

    fn text_fields_mut(&mut self) -> [&mut Option<String>; 7] {
        [
            &mut self.url,
            &mut self.commit,
            &mut self.reference,
            &mut self.task,
            &mut self.target,
            &mut self.description,
            &mut self.created_by,
        ]
    }
}

impl Record for Deployment {
    const TABLE: &'static str = TABLE_DEPLOYMENT;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.repo_id);
        nullify(&mut self.number);
        nullify(&mut self.created_at);
        for field in self.text_fields_mut() {
            nullify(field);
        }
        let empty = match &self.payload {
            Some(Value::Object(map)) => map.is_empty(),
            Some(Value::Null) => true,
            _ => false,
        };
        if empty {
            self.payload = None;
        }
    }

    fn validate(&mut self) -> Result<()> {
        if missing(&self.repo_id) {
            return Err(DatabaseError::empty("deployment", "repo_id"));
        }
        if missing(&self.number) {
            return Err(DatabaseError::empty("deployment", "number"));
        }

        for field in self.text_fields_mut() {
            sanitize_field(field);
        }
        Ok(())
    }
}

fn payload_to_json(payload: BTreeMap<String, String>) -> Value {
    Value::Object(
        payload
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect::<Map<String, Value>>(),
    )
}

/// Non-string JSON values are kept in their serialized form.
fn payload_from_json(payload: &Value) -> BTreeMap<String, String> {
    let Value::Object(map) = payload else {
        return BTreeMap::new();
    };
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> library::Deployment {
        library::Deployment {
            id: Some(1),
            repo_id: Some(1),
            number: Some(1),
            url: Some("https://api.github.com/repos/github/octocat/deployments/1".into()),
            commit: Some("48afb5bdc41ad69bf22588491333f7cf71135163".into()),
            reference: Some("refs/heads/main".into()),
            task: Some("vela-deploy".into()),
            target: Some("production".into()),
            description: Some("Deployment request from Vela".into()),
            payload: Some(BTreeMap::from([("foo".to_string(), "test1".to_string())])),
            created_at: Some(1_563_474_077),
            created_by: Some("octocat".into()),
            builds: Some(vec![1, 2]),
        }
    }

    #[test]
    fn round_trip() {
        assert_eq!(Deployment::from_library(sample()).to_library(), sample());
    }

    #[test]
    fn empty_payload_is_null() {
        let mut deployment = sample();
        deployment.payload = Some(BTreeMap::new());
        let record = Deployment::from_library(deployment);
        assert_eq!(record.payload, None);
        assert_eq!(record.to_library().payload, Some(BTreeMap::new()));
    }

    #[test]
    fn non_string_payload_values_are_stringified() {
        let record = Deployment {
            payload: Some(serde_json::json!({"replicas": 3, "region": "us-east"})),
            ..Default::default()
        };
        let payload = record.to_library().payload.unwrap_or_default();
        assert_eq!(payload.get("replicas").map(String::as_str), Some("3"));
        assert_eq!(payload.get("region").map(String::as_str), Some("us-east"));
    }

    #[test]
    fn validate_requires_number() {
        let mut record = Deployment::from_library(sample());
        record.number = None;
        assert!(matches!(
            record.validate(),
            Err(DatabaseError::EmptyField { entity: "deployment", field: "number" })
        ));
    }
}
