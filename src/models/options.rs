//! Calculation options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a /31 IPv4 network counts its hosts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostRule {
    /// Point-to-point links use both addresses (RFC 3021).
    #[default]
    Rfc3021,
    /// Network and broadcast are always reserved, so a /31 has no hosts.
    Traditional,
}

impl FromStr for HostRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rfc3021" => Ok(HostRule::Rfc3021),
            "traditional" => Ok(HostRule::Traditional),
            other => Err(format!("unknown host rule: {other}")),
        }
    }
}

impl fmt::Display for HostRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostRule::Rfc3021 => write!(f, "rfc3021"),
            HostRule::Traditional => write!(f, "traditional"),
        }
    }
}

/// Options accepted by the calculation entry points.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalcOptions {
    /// Only consulted for IPv4 /31 networks.
    #[serde(default, rename = "ipv4HostRule")]
    pub host_rule: HostRule,
}

impl CalcOptions {
    pub fn with_host_rule(host_rule: HostRule) -> CalcOptions {
        CalcOptions { host_rule }
    }
}
