//! Host or named volume mounted into a container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

const DEFAULT_ACCESS_MODE: &str = "ro";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub source: String,
    pub destination: String,
    pub access_mode: String,
}

/// Parses `source[:destination[:mode]]`. The destination defaults to the
/// source and the mode to read-only.
impl FromStr for Volume {
    type Err = PipelineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(PipelineError::InvalidVolume(raw.to_string()));
        }

        let (source, destination, mode) = match parts.as_slice() {
            [source] => (*source, *source, DEFAULT_ACCESS_MODE),
            [source, destination] => (*source, *destination, DEFAULT_ACCESS_MODE),
            [source, destination, mode] => (*source, *destination, *mode),
            _ => return Err(PipelineError::InvalidVolume(raw.to_string())),
        };

        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            access_mode: mode.to_string(),
        })
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.destination, self.access_mode)
    }
}
