//! Containers: the unit of execution in a compiled pipeline.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use ci_library::constants::{DRIVER_KUBERNETES, STATUS_FAILURE, STATUS_SUCCESS};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::port::Port;
use crate::ruleset::{RuleData, Ruleset};
use crate::secret::StepSecret;
use crate::ulimit::Ulimit;
use crate::volume::Volume;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub id: String,
    pub commands: Vec<String>,
    pub detach: bool,
    pub directory: String,
    pub entrypoint: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub extra_hosts: Vec<String>,
    pub image: String,
    pub name: String,
    pub needs: Vec<String>,
    pub networks: Vec<String>,
    pub number: i32,
    pub ports: Vec<Port>,
    pub privileged: bool,
    pub pull: String,
    pub ruleset: Ruleset,
    pub secrets: Vec<StepSecret>,
    pub ulimits: Vec<Ulimit>,
    pub volumes: Vec<Volume>,
    pub user: String,
    pub report_as: String,
}

impl Container {
    /// True for a container with no fields set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decide whether the container runs given the current build status.
    ///
    /// Once a build has failed, only containers whose rules mention a status
    /// and match the event keep running. While the build is succeeding,
    /// containers whose status rules only accept a failed build are skipped.
    /// The check is "matches a failure, not the actual status", so an
    /// `if: status: [success]` container still runs on success.
    pub fn execute(&self, data: &RuleData) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }

        let status_rules = !self.ruleset.is_empty() && self.ruleset.has_status();

        if !data.status.eq_ignore_ascii_case(STATUS_SUCCESS) {
            return Ok(status_rules && self.ruleset.matches(data)?);
        }
        if !status_rules {
            return Ok(true);
        }

        let failed = RuleData {
            status: STATUS_FAILURE.to_string(),
            ..data.clone()
        };
        if self.ruleset.matches(&failed)? && !self.ruleset.matches(data)? {
            tracing::debug!(container = %self.id, "skipping failure-only container");
            return Ok(false);
        }
        Ok(true)
    }

    /// Copy with the id rewritten to be legal under `driver`.
    pub fn sanitize(&self, driver: &str) -> Self {
        Self {
            id: sanitize_id(&self.id, driver),
            ..self.clone()
        }
    }

    /// Add `environment` to the container's, overriding existing keys.
    pub fn merge_env(&mut self, environment: &BTreeMap<String, String>) {
        self.environment
            .extend(environment.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
}

/// Rewrite an identifier for a container runtime.
///
/// Kubernetes names may not contain spaces, underscores or dots. Other
/// runtimes only reject spaces.
pub fn sanitize_id(id: &str, driver: &str) -> String {
    if driver == DRIVER_KUBERNETES {
        id.replace([' ', '_', '.'], "-")
    } else {
        id.replace(' ', "-")
    }
}

/// Ordered containers of a pipeline section (services, steps, stage steps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerSlice(pub Vec<Container>);

impl ContainerSlice {
    /// Keep the containers whose ruleset matches `data`, numbered from 1.
    pub fn purge(&self, data: &RuleData) -> Result<Self> {
        let mut counter = 1;
        self.purge_numbered(data, &mut counter)
    }

    /// Purge, numbering survivors from `counter` onwards.
    pub(crate) fn purge_numbered(&self, data: &RuleData, counter: &mut i32) -> Result<Self> {
        let mut survivors = Vec::with_capacity(self.len());
        for container in self.iter() {
            if !container.ruleset.matches(data)? {
                tracing::debug!(container = %container.name, "purged by ruleset");
                continue;
            }

            let mut container = container.clone();
            container.number = *counter;
            *counter += 1;
            survivors.push(container);
        }
        Ok(Self(survivors))
    }

    pub fn sanitize(&self, driver: &str) -> Self {
        self.iter().map(|container| container.sanitize(driver)).collect()
    }
}

impl Deref for ContainerSlice {
    type Target = Vec<Container>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ContainerSlice {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Container> for ContainerSlice {
    fn from_iter<I: IntoIterator<Item = Container>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Container>> for ContainerSlice {
    fn from(containers: Vec<Container>) -> Self {
        Self(containers)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::ruleset::Rules;

    fn step(name: &str, branches: &[&str]) -> Container {
        Container {
            id: format!("step_github_octocat_1_{name}"),
            name: name.to_string(),
            image: "alpine:latest".into(),
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

    fn status_step(if_status: &[&str], unless_status: &[&str]) -> Container {
        let mut container = step("notify", &[]);
        container.ruleset.r#if.status = if_status.iter().copied().collect();
        container.ruleset.unless.status = unless_status.iter().copied().collect();
        container
    }

    fn on(status: &str) -> RuleData {
        RuleData {
            branch: "main".into(),
            event: "push".into(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn purge_renumbers_survivors() {
        let steps = ContainerSlice(vec![
            step("clone", &[]),
            step("deploy", &["release"]),
            step("test", &["main"]),
            step("publish", &["main", "release"]),
        ]);

        let purged = steps.purge(&on("")).unwrap();
        let survivors: Vec<(&str, i32)> =
            purged.iter().map(|c| (c.name.as_str(), c.number)).collect();
        assert_eq!(survivors, vec![("clone", 1), ("test", 2), ("publish", 3)]);
    }

    #[test]
    fn purge_keeps_input_untouched() {
        let steps = ContainerSlice(vec![step("deploy", &["release"])]);
        let purged = steps.purge(&on("")).unwrap();
        assert!(purged.is_empty());
        assert_eq!(steps.len(), 1);
    }

    #[rstest]
    #[case::plain_on_success(&[], &[], "success", true)]
    #[case::plain_on_failure(&[], &[], "failure", false)]
    #[case::failure_only_on_failure(&["failure"], &[], "failure", true)]
    #[case::failure_only_on_success(&["failure"], &[], "success", false)]
    #[case::always_on_success(&["success", "failure"], &[], "success", true)]
    #[case::always_on_failure(&["success", "failure"], &[], "failure", true)]
    #[case::unless_success_on_success(&[], &["success"], "success", false)]
    #[case::unless_success_on_failure(&[], &["success"], "failure", true)]
    #[case::success_only_on_success(&["success"], &[], "success", true)]
    #[case::success_only_on_failure(&["success"], &[], "failure", false)]
    fn execute_by_status(
        #[case] if_status: &[&str],
        #[case] unless_status: &[&str],
        #[case] status: &str,
        #[case] expected: bool,
    ) {
        let container = status_step(if_status, unless_status);
        assert_eq!(container.execute(&on(status)).unwrap(), expected);
    }

    #[test]
    fn execute_failed_build_without_status_rules() {
        let container = step("test", &["main"]);
        assert!(!container.execute(&on("failure")).unwrap());
        assert!(container.execute(&on("success")).unwrap());
    }

    #[test]
    fn empty_container_never_executes() {
        assert!(!Container::default().execute(&on("success")).unwrap());
    }

    #[rstest]
    #[case("docker", "step_foo bar.1", "step_foo-bar.1")]
    #[case("kubernetes", "step_foo bar.1", "step-foo-bar-1")]
    #[case("kubernetes", "service_foo bar_1_postgres", "service-foo-bar-1-postgres")]
    fn sanitize_by_driver(#[case] driver: &str, #[case] id: &str, #[case] expected: &str) {
        let container = Container {
            id: id.into(),
            ..Default::default()
        };
        let sanitized = container.sanitize(driver);
        assert_eq!(sanitized.id, expected);
        assert_eq!(sanitized.sanitize(driver), sanitized);
    }

    #[test]
    fn merge_env_overrides_existing_keys() {
        let mut container = Container {
            environment: BTreeMap::from([
                ("CI".to_string(), "false".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ]),
            ..Default::default()
        };
        container.merge_env(&BTreeMap::from([
            ("CI".to_string(), "true".to_string()),
            ("BUILD_NUMBER".to_string(), "42".to_string()),
        ]));
        assert_eq!(container.environment.get("CI").map(String::as_str), Some("true"));
        assert_eq!(container.environment.get("HOME").map(String::as_str), Some("/root"));
        assert_eq!(container.environment.len(), 3);
    }
}
