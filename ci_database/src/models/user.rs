//! users: an account authenticated through the SCM.

use std::sync::LazyLock;

use ci_library::constants::{FAVORITES_MAX_SIZE, TABLE_USER, USER_NAME_MAX_LENGTH};
use ci_library::models::user as library;
use diesel::prelude::*;
use regex::Regex;

use super::dashboard::joined_size;
use crate::config::DatabaseConfig;
use crate::crypto::{decrypt_field, encrypt_field};
use crate::error::{DatabaseError, Result};
use crate::null::{missing, nullify, present};
use crate::record::Record;
use crate::sanitize::sanitize;
use crate::schema::users;

static USER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9_-]{{0,{USER_NAME_MAX_LENGTH}}}$")).unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
pub struct User {
    #[diesel(deserialize_as = i64)]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub refresh_token: Option<String>,
    pub token: Option<String>,
    pub hash: Option<String>,
    pub favorites: Vec<String>,
    pub active: Option<bool>,
    pub admin: Option<bool>,
    pub dashboards: Vec<String>,
}

impl User {
    pub fn from_library(user: library::User) -> Self {
        let mut record = Self {
            id: user.id,
            name: user.name,
            refresh_token: user.refresh_token,
            token: user.token,
            hash: user.hash,
            favorites: user.favorites.unwrap_or_default(),
            active: Some(user.active.unwrap_or(false)),
            admin: Some(user.admin.unwrap_or(false)),
            dashboards: user.dashboards.unwrap_or_default(),
        };
        record.nullify();
        record
    }

    pub fn to_library(&self) -> library::User {
        library::User {
            id: present(&self.id),
            name: present(&self.name),
            refresh_token: present(&self.refresh_token),
            token: present(&self.token),
            hash: present(&self.hash),
            favorites: Some(self.favorites.clone()),
            active: present(&self.active),
            admin: present(&self.admin),
            dashboards: Some(self.dashboards.clone()),
        }
    }

    fn secret_fields_mut(&mut self) -> [&mut Option<String>; 3] {
        [&mut self.hash, &mut self.token, &mut self.refresh_token]
    }
}

impl Record for User {
    const TABLE: &'static str = TABLE_USER;

    fn nullify(&mut self) {
        nullify(&mut self.id);
        nullify(&mut self.name);
        for field in self.secret_fields_mut() {
            nullify(field);
        }
    }

    fn validate(&mut self) -> Result<()> {
        let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) else {
            return Err(DatabaseError::empty("user", "name"));
        };
        if !USER_NAME_REGEX.is_match(name) {
            return Err(DatabaseError::invalid("user", "name"));
        }
        if missing(&self.token) {
            return Err(DatabaseError::empty("user", "token"));
        }
        if missing(&self.hash) {
            return Err(DatabaseError::empty("user", "hash"));
        }
        if joined_size(&self.favorites) > FAVORITES_MAX_SIZE {
            return Err(DatabaseError::LimitExceeded {
                entity: "user",
                field: "favorites",
                limit: FAVORITES_MAX_SIZE,
            });
        }

        for favorite in &mut self.favorites {
            *favorite = sanitize(favorite);
        }
        Ok(())
    }

    fn seal(&mut self, config: &DatabaseConfig) -> Result<()> {
        for field in self.secret_fields_mut() {
            encrypt_field(&config.encryption_key, field)?;
        }
        Ok(())
    }

    fn unseal(&mut self, config: &DatabaseConfig) -> Result<()> {
        for field in self.secret_fields_mut() {
            decrypt_field(&config.encryption_key, field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::record::{prepare, restore};

    fn sample() -> User {
        User {
            id: Some(1),
            name: Some("octocat".into()),
            refresh_token: Some("superSecretRefreshToken".into()),
            token: Some("superSecretToken".into()),
            hash: Some("superSecretHash".into()),
            favorites: vec!["github/octocat".into()],
            active: Some(true),
            admin: Some(false),
            dashboards: vec!["45bcf19b-c151-4e2d-b8c6-80a62ba2eae7".into()],
        }
    }

    #[rstest]
    #[case("octocat")]
    #[case("octo-cat_42")]
    #[case("a")]
    fn accepts_scm_user_names(#[case] name: &str) {
        let mut user = sample();
        user.name = Some(name.into());
        user.validate().unwrap();
    }

    #[rstest]
    #[case("octo cat")]
    #[case("octo.cat")]
    #[case("<b>octocat</b>")]
    #[case("abcdefghijklmnopqrstuvwxyzabcdefghijklm")]
    fn rejects_malformed_user_names(#[case] name: &str) {
        let mut user = sample();
        user.name = Some(name.into());
        assert!(matches!(
            user.validate(),
            Err(DatabaseError::InvalidField { entity: "user", field: "name" })
        ));
    }

    #[test]
    fn name_length_limit_is_inclusive() {
        let mut user = sample();
        user.name = Some("a".repeat(USER_NAME_MAX_LENGTH));
        user.validate().unwrap();

        user.name = Some("a".repeat(USER_NAME_MAX_LENGTH + 1));
        assert!(matches!(
            user.validate(),
            Err(DatabaseError::InvalidField { entity: "user", field: "name" })
        ));
    }

    #[test]
    fn favorites_are_bounded() {
        let mut user = sample();
        user.favorites = vec!["github/octocat".to_string(); 500];
        assert!(matches!(
            user.validate(),
            Err(DatabaseError::LimitExceeded { field: "favorites", limit: 5000, .. })
        ));
    }

    #[test]
    fn tokens_are_encrypted_at_rest() {
        let config = DatabaseConfig::new("C639A572E14D5075C526FDDD43E4ECF6");
        let mut user = sample();

        prepare(&mut user, &config).unwrap();
        assert_ne!(user.token.as_deref(), Some("superSecretToken"));
        assert_ne!(user.refresh_token.as_deref(), Some("superSecretRefreshToken"));
        assert_ne!(user.hash.as_deref(), Some("superSecretHash"));

        restore(&mut user, &config).unwrap();
        assert_eq!(user, sample());
    }

    #[test]
    fn missing_refresh_token_stays_null() {
        let config = DatabaseConfig::new("C639A572E14D5075C526FDDD43E4ECF6");
        let mut user = sample();
        user.refresh_token = Some(String::new());

        prepare(&mut user, &config).unwrap();
        assert_eq!(user.refresh_token, None);
    }
}
