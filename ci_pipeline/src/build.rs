//! The compiled pipeline handed to a worker.

use std::collections::BTreeMap;

use ci_library::constants::{DRIVER_DOCKER, DRIVER_KUBERNETES};
use serde::{Deserialize, Serialize};

use crate::container::{sanitize_id, ContainerSlice};
use crate::error::Result;
use crate::ruleset::RuleData;
use crate::secret::Secret;
use crate::stage::StageSlice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub template: bool,
    pub clone: bool,
    pub environment: Vec<String>,
}

/// Worker requirements for running the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Worker {
    pub flavor: String,
    pub platform: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub id: String,
    pub version: String,
    pub metadata: Metadata,
    pub environment: BTreeMap<String, String>,
    pub worker: Worker,
    pub secrets: Vec<Secret>,
    pub services: ContainerSlice,
    pub stages: StageSlice,
    pub steps: ContainerSlice,
}

impl Build {
    /// Drop the services, stages and steps whose rules do not match `data`.
    ///
    /// A pipeline may use stages or steps but not both; such a pipeline
    /// yields `None`.
    pub fn purge(&self, data: &RuleData) -> Result<Option<Self>> {
        if self.has_stages_and_steps() {
            tracing::warn!(build = %self.id, "pipeline has both stages and steps");
            return Ok(None);
        }

        let mut build = self.clone();
        build.services = self.services.purge(data)?;
        if !self.stages.is_empty() {
            build.stages = self.stages.purge(data)?;
        } else if !self.steps.is_empty() {
            build.steps = self.steps.purge(data)?;
        }

        Ok(Some(build))
    }

    /// Rewrite every identifier so it is legal under `driver`.
    ///
    /// Yields `None` for a pipeline with both stages and steps, or for a
    /// driver other than docker and kubernetes.
    pub fn sanitize(&self, driver: &str) -> Option<Self> {
        if self.has_stages_and_steps() {
            tracing::warn!(build = %self.id, "pipeline has both stages and steps");
            return None;
        }
        if driver != DRIVER_DOCKER && driver != DRIVER_KUBERNETES {
            tracing::warn!(driver, "unrecognized runtime driver");
            return None;
        }

        let secrets = self
            .secrets
            .iter()
            .map(|secret| {
                if secret.origin.is_empty() {
                    return secret.clone();
                }
                Secret {
                    origin: secret.origin.sanitize(driver),
                    ..secret.clone()
                }
            })
            .collect();

        Some(Self {
            id: sanitize_id(&self.id, driver),
            secrets,
            services: self.services.sanitize(driver),
            stages: self.stages.sanitize(driver),
            steps: self.steps.sanitize(driver),
            ..self.clone()
        })
    }

    fn has_stages_and_steps(&self) -> bool {
        !self.stages.is_empty() && !self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::container::Container;
    use crate::ruleset::{Rules, Ruleset};
    use crate::stage::Stage;

    fn container(id: &str, name: &str, branches: &[&str]) -> Container {
        Container {
            id: id.into(),
            name: name.into(),
            image: "alpine".into(),
            ruleset: Ruleset {
                r#if: Rules {
                    branch: branches.iter().copied().collect(),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn steps_build() -> Build {
        Build {
            id: "foo bar_1.".into(),
            version: "1".into(),
            services: vec![container("service_foo bar_1_postgres", "postgres", &[])].into(),
            steps: vec![
                container("step_foo bar_1_init", "init", &[]),
                container("step_foo bar_1_deploy", "deploy", &["release"]),
                container("step_foo bar_1_test", "test", &[]),
            ]
            .into(),
            secrets: vec![
                Secret {
                    name: "docker_password".into(),
                    key: "octocat/docker/password".into(),
                    engine: "native".into(),
                    kind: "repo".into(),
                    ..Default::default()
                },
                Secret {
                    name: "vault_token".into(),
                    origin: container("secret_foo bar_1_vault", "vault", &[]),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn push_to(branch: &str) -> RuleData {
        RuleData {
            branch: branch.into(),
            event: "push".into(),
            ..Default::default()
        }
    }

    #[test]
    fn purge_steps_renumbers() {
        let purged = steps_build().purge(&push_to("main")).unwrap().unwrap();
        let steps: Vec<(&str, i32)> =
            purged.steps.iter().map(|c| (c.name.as_str(), c.number)).collect();
        assert_eq!(steps, vec![("init", 1), ("test", 2)]);
        assert_eq!(purged.services.len(), 1);
        assert_eq!(purged.services[0].number, 1);
    }

    #[test]
    fn purge_stages() {
        let build = Build {
            stages: vec![Stage {
                name: "deploy".into(),
                steps: vec![container("deploy", "deploy", &["release"])].into(),
                ..Default::default()
            }]
            .into(),
            ..Default::default()
        };
        let purged = build.purge(&push_to("main")).unwrap().unwrap();
        assert!(purged.stages.is_empty());
    }

    #[test]
    fn stages_and_steps_are_rejected() {
        let mut build = steps_build();
        build.stages = vec![Stage {
            name: "test".into(),
            steps: vec![container("test", "test", &[])].into(),
            ..Default::default()
        }]
        .into();

        assert_eq!(build.purge(&push_to("main")).unwrap(), None);
        assert_eq!(build.sanitize("docker"), None);
    }

    #[test]
    fn sanitize_for_kubernetes() {
        let sanitized = steps_build().sanitize("kubernetes").unwrap();
        assert_eq!(sanitized.id, "foo-bar-1-");
        assert_eq!(sanitized.services[0].id, "service-foo-bar-1-postgres");
        assert_eq!(sanitized.steps[0].id, "step-foo-bar-1-init");
        assert_eq!(sanitized.secrets[1].origin.id, "secret-foo-bar-1-vault");
        assert!(sanitized.secrets[0].origin.is_empty());
    }

    #[test]
    fn sanitize_for_docker_keeps_underscores() {
        let sanitized = steps_build().sanitize("docker").unwrap();
        assert_eq!(sanitized.id, "foo-bar_1.");
        assert_eq!(sanitized.services[0].id, "service_foo-bar_1_postgres");
    }

    #[rstest]
    #[case("docker")]
    #[case("kubernetes")]
    fn sanitize_is_idempotent(#[case] driver: &str) {
        let once = steps_build().sanitize(driver).unwrap();
        assert_eq!(once.sanitize(driver), Some(once));
    }

    #[test]
    fn sanitize_rejects_unknown_driver() {
        assert_eq!(steps_build().sanitize("podman"), None);
    }
}
