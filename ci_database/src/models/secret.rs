//! secrets: a named credential scoped to a repo, an org, or a shared team.

use ci_library::constants::{SECRET_ORG, SECRET_REPO, SECRET_SHARED, TABLE_SECRET};
use ci_library::models::secret as library;
use diesel::prelude::*;

use crate::config::DatabaseConfig;
use crate::crypto::{decrypt_field, encrypt_field};
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::{sanitize, sanitize_field};
use crate::schema::secrets;

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = secrets)]
pub struct Secret {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub team: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub kind: Option<String>,
    pub images: Vec<String>,
    pub events: Vec<String>,
    pub allow_command: Option<bool>,
    pub allow_substitution: Option<bool>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
}

impl Secret {
    pub fn from_library(secret: library::Secret) -> Self {
        let mut record = Self {
            id: secret.id,
            org: secret.org,
            repo: secret.repo,
            team: secret.team,
            name: secret.name,
            value: secret.value,
            kind: secret.kind,
            images: secret.images.unwrap_or_default(),
            events: secret.events.unwrap_or_default(),
            allow_command: Some(secret.allow_command.unwrap_or(false)),
            allow_substitution: Some(secret.allow_substitution.unwrap_or(false)),
            created_at: secret.created_at,
            created_by: secret.created_by,
            updated_at: secret.updated_at,
            updated_by: secret.updated_by,
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::Secret {
        library::Secret {
            id: present(&self.id),
            org: present(&self.org),
            repo: present(&self.repo),
            team: present(&self.team),
            name: present(&self.name),
            value: present(&self.value),
            kind: present(&self.kind),
            images: Some(self.images.clone()),
            events: Some(self.events.clone()),
            allow_command: present(&self.allow_command),
            allow_substitution: present(&self.allow_substitution),
            created_at: present(&self.created_at),
            created_by: present(&self.created_by),
            updated_at: present(&self.updated_at),
            updated_by: present(&self.updated_by),
        }
    }
}

impl Record for Secret {
    const TABLE: &'static str = TABLE_SECRET;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.org);
        nullify(&mut self.repo);
        nullify(&mut self.team);
        nullify(&mut self.name);
        nullify(&mut self.value);
        nullify(&mut self.kind);
        nullify(&mut self.created_at);
        nullify(&mut self.created_by);
        nullify(&mut self.updated_at);
        nullify(&mut self.updated_by);
    }

    fn validate(&mut self) -> Result<()> {
        let kind = match self.kind.as_deref() {
            None | Some("") => return Err(DatabaseError::empty("secret", "type")),
            Some(kind @ (SECRET_REPO | SECRET_ORG | SECRET_SHARED)) => kind,
            Some(_) => return Err(DatabaseError::invalid("secret", "type")),
        };
        if missing(&self.org) {
            return Err(DatabaseError::empty("secret", "org"));
        }
        match kind {
            SECRET_SHARED if missing(&self.team) => {
                return Err(DatabaseError::empty("secret", "team"));
            }
            SECRET_REPO | SECRET_ORG if missing(&self.repo) => {
                return Err(DatabaseError::empty("secret", "repo"));
            }
            _ => {}
        }
        if missing(&self.name) {
            return Err(DatabaseError::empty("secret", "name"));
        }
        if missing(&self.value) {
            return Err(DatabaseError::empty("secret", "value"));
        }

        sanitize_field(&mut self.org);
        sanitize_field(&mut self.repo);
        sanitize_field(&mut self.team);
        sanitize_field(&mut self.name);
        sanitize_field(&mut self.kind);
        for image in &mut self.images {
            *image = sanitize(image);
        }
        Ok(())
    }

    fn seal(&mut self, config: &DatabaseConfig) -> Result<()> {
        encrypt_field(&config.encryption_key, &mut self.value)
    }

    fn unseal(&mut self, config: &DatabaseConfig) -> Result<()> {
        decrypt_field(&config.encryption_key, &mut self.value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const KEY: &str = "C639A572E14D5075C526FDDD43E4ECF6";

    fn repo_secret() -> Secret {
        Secret {
            id: Some(1),
            org: Some("github".into()),
            repo: Some("octocat".into()),
            name: Some("foo".into()),
            value: Some("bar".into()),
            kind: Some("repo".into()),
            images: vec!["alpine".into()],
            events: vec!["push".into(), "tag".into(), "deployment".into()],
            allow_command: Some(true),
            allow_substitution: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn encrypt_then_decrypt_restores_value() {
        let config = DatabaseConfig::new(KEY);
        let mut secret = repo_secret();

        secret.seal(&config).unwrap();
        assert_ne!(secret.value.as_deref(), Some("bar"));
        assert_eq!(secret.name.as_deref(), Some("foo"));

        secret.unseal(&config).unwrap();
        assert_eq!(secret.value.as_deref(), Some("bar"));
    }

    #[test]
    fn decrypt_with_empty_key_fails() {
        let mut secret = repo_secret();
        secret.seal(&DatabaseConfig::new(KEY)).unwrap();
        assert!(matches!(
            secret.unseal(&DatabaseConfig::new("")),
            Err(DatabaseError::InvalidKey(0))
        ));
    }

    #[test]
    fn decrypt_of_plaintext_fails() {
        let mut secret = repo_secret();
        assert!(secret.unseal(&DatabaseConfig::new(KEY)).is_err());
    }

    #[rstest]
    #[case::repo_needs_repo("repo", "repo")]
    #[case::org_needs_repo("org", "repo")]
    #[case::shared_needs_team("shared", "team")]
    fn validate_scope_requirements(#[case] kind: &str, #[case] field: &str) {
        let mut secret = Secret {
            org: Some("github".into()),
            name: Some("foo".into()),
            value: Some("bar".into()),
            kind: Some(kind.into()),
            ..Default::default()
        };
        match secret.validate() {
            Err(DatabaseError::EmptyField { entity: "secret", field: got }) => {
                assert_eq!(got, field)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_unknown_type() {
        let mut secret = repo_secret();
        secret.kind = Some("global".into());
        assert!(matches!(
            secret.validate(),
            Err(DatabaseError::InvalidField { field: "type", .. })
        ));
    }

    #[test]
    fn validate_sanitizes_images() {
        let mut secret = repo_secret();
        secret.images = vec!["<b>alpine</b>".into(), "golang:1.22".into()];
        secret.validate().unwrap();
        assert_eq!(secret.images, vec!["alpine".to_string(), "golang:1.22".to_string()]);
    }
}
