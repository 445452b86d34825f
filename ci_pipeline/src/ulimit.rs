//! Resource limit applied to a container process.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ulimit {
    pub name: String,
    pub soft: i64,
    pub hard: i64,
}

/// Parses `name=soft[:hard]`. A single value sets both limits.
impl FromStr for Ulimit {
    type Err = PipelineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidUlimit(raw.to_string());

        let (name, limits) = raw.split_once('=').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }

        let parse = |value: &str| value.parse::<i64>().map_err(|_| invalid());
        let (soft, hard) = match limits.split_once(':') {
            None => {
                let limit = parse(limits)?;
                (limit, limit)
            }
            Some((soft, hard)) => (parse(soft)?, parse(hard)?),
        };

        Ok(Self {
            name: name.to_string(),
            soft,
            hard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_sets_both_limits() {
        let ulimit: Ulimit = "nofile=1024".parse().unwrap();
        assert_eq!(
            ulimit,
            Ulimit {
                name: "nofile".into(),
                soft: 1024,
                hard: 1024
            }
        );
    }

    #[test]
    fn soft_and_hard_limits() {
        let ulimit: Ulimit = "nproc=512:2048".parse().unwrap();
        assert_eq!((ulimit.soft, ulimit.hard), (512, 2048));
    }

    #[test]
    fn rejects_malformed_limits() {
        for raw in ["nofile", "=1", "nofile=abc", "nofile=1:2:3"] {
            assert!(
                matches!(raw.parse::<Ulimit>(), Err(PipelineError::InvalidUlimit(_))),
                "{raw} should be rejected"
            );
        }
    }
}
