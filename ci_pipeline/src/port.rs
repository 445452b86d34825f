//! Port published from a container.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

const DEFAULT_PROTOCOL: &str = "tcp";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    /// Host side of the mapping; `None` lets the runtime pick.
    pub host: Option<u16>,
    pub container: u16,
    pub protocol: String,
}

/// Parses `[host:]container[/protocol]`, defaulting the protocol to tcp.
impl FromStr for Port {
    type Err = PipelineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidPort(raw.to_string());

        let (mapping, protocol) = match raw.split_once('/') {
            Some((mapping, protocol)) if matches!(protocol, "tcp" | "udp" | "sctp") => {
                (mapping, protocol)
            }
            Some(_) => return Err(invalid()),
            None => (raw, DEFAULT_PROTOCOL),
        };

        let parse = |value: &str| value.parse::<u16>().map_err(|_| invalid());
        let (host, container) = match mapping.split_once(':') {
            None => (None, parse(mapping)?),
            Some((host, container)) => (Some(parse(host)?), parse(container)?),
        };

        Ok(Self {
            host,
            container,
            protocol: protocol.to_string(),
        })
    }
}
