//! Stages: named groups of steps with dependency edges.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::container::ContainerSlice;
use crate::error::Result;
use crate::ruleset::RuleData;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    pub name: String,
    pub needs: Vec<String>,
    pub independent: bool,
    pub environment: BTreeMap<String, String>,
    pub steps: ContainerSlice,
}

impl Stage {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageSlice(pub Vec<Stage>);

impl StageSlice {
    /// Purge every stage's steps against `data`.
    ///
    /// Step numbers run across the whole pipeline rather than restarting in
    /// each stage. Stages left without steps are dropped.
    pub fn purge(&self, data: &RuleData) -> Result<Self> {
        let mut counter = 1;
        let mut stages = Vec::with_capacity(self.len());

        for stage in self.iter() {
            let steps = stage.steps.purge_numbered(data, &mut counter)?;
            if steps.is_empty() {
                tracing::debug!(stage = %stage.name, "dropping stage with no remaining steps");
                continue;
            }
            stages.push(Stage {
                steps,
                ..stage.clone()
            });
        }

        Ok(Self(stages))
    }

    pub fn sanitize(&self, driver: &str) -> Self {
        self.iter()
            .map(|stage| Stage {
                steps: stage.steps.sanitize(driver),
                ..stage.clone()
            })
            .collect()
    }
}

impl Deref for StageSlice {
    type Target = Vec<Stage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StageSlice {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Stage> for StageSlice {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Stage>> for StageSlice {
    fn from(stages: Vec<Stage>) -> Self {
        Self(stages)
    }
}
