//! Secrets requested by a pipeline and their mapping into steps.

use ci_library::constants::{DRIVER_NATIVE, DRIVER_VAULT};
use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::{PipelineError, Result};

/// A secret declared at the top of a pipeline.
///
/// `origin` is set for secrets fetched by a plugin container at runtime
/// instead of read from an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    pub name: String,
    pub value: String,
    pub key: String,
    pub engine: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: Container,
    pub pull: String,
}

impl Secret {
    /// Split an org secret key (`org/name`) and check it belongs to `org`.
    ///
    /// Vault keys may nest below the org; native keys may not.
    pub fn parse_org(&self, org: &str) -> Result<(String, String)> {
        self.check_engine()?;

        let (owner, name) = self
            .key
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
            .ok_or_else(|| self.invalid_path())?;
        if self.engine == DRIVER_NATIVE && name.contains('/') {
            return Err(self.invalid_path());
        }
        if owner != org {
            return Err(PipelineError::InvalidOrg {
                found: owner.to_string(),
                expected: org.to_string(),
            });
        }

        Ok((owner.to_string(), name.to_string()))
    }

    /// Split a repo secret key (`org/repo/name`) and check it belongs to
    /// `org/repo`.
    pub fn parse_repo(&self, org: &str, repo: &str) -> Result<(String, String, String)> {
        let (owner, repository, name) = self.split_three()?;
        if owner != org {
            return Err(PipelineError::InvalidOrg {
                found: owner,
                expected: org.to_string(),
            });
        }
        if repository != repo {
            return Err(PipelineError::InvalidRepo {
                found: repository,
                expected: repo.to_string(),
            });
        }
        Ok((owner, repository, name))
    }

    /// Split a shared secret key (`org/team/name`).
    pub fn parse_shared(&self) -> Result<(String, String, String)> {
        self.split_three()
    }

    fn split_three(&self) -> Result<(String, String, String)> {
        self.check_engine()?;

        let parts: Vec<&str> = self.key.splitn(3, '/').collect();
        let [first, second, name] = parts.as_slice() else {
            return Err(self.invalid_path());
        };
        if first.is_empty() || second.is_empty() || name.is_empty() {
            return Err(self.invalid_path());
        }
        if self.engine == DRIVER_NATIVE && name.contains('/') {
            return Err(self.invalid_path());
        }

        Ok((first.to_string(), second.to_string(), name.to_string()))
    }

    fn check_engine(&self) -> Result<()> {
        match self.engine.as_str() {
            DRIVER_NATIVE | DRIVER_VAULT => Ok(()),
            other => Err(PipelineError::InvalidEngine(other.to_string())),
        }
    }

    fn invalid_path(&self) -> PipelineError {
        PipelineError::InvalidPath(self.key.clone())
    }
}

/// Maps a pipeline secret onto an environment variable inside a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSecret {
    pub source: String,
    pub target: String,
}
