//! Result records returned by the calculation entry points.
//!
//! Field names serialize in camelCase and counts as decimal strings, matching
//! what existing callers consume.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Read a `version` field and reject anything other than `expected`, so an
/// untagged [`SubnetResult`] cannot pair one family's number with the other
/// family's record.
fn expect_version<'de, D>(deserializer: D, expected: u8) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != expected {
        return Err(D::Error::custom(format!(
            "expected version {expected}, found {version}"
        )));
    }
    Ok(version)
}

fn ipv4_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    expect_version(deserializer, 4)
}

fn ipv6_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    expect_version(deserializer, 6)
}

/// Binary renderings for an IPv4 result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4Binary {
    pub ip: String,
    pub subnet_mask: String,
    pub network_address: String,
    pub broadcast_address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4SubnetResult {
    /// Always 4.
    #[serde(deserialize_with = "ipv4_version")]
    pub version: u8,
    pub ip: String,
    pub prefix: u8,
    pub network_address: String,
    pub broadcast_address: String,
    /// `None` when the subnet has no usable hosts (traditional /31).
    pub first_host: Option<String>,
    pub last_host: Option<String>,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub total_addresses: String,
    pub usable_addresses: String,
    pub binary: Ipv4Binary,
}

/// Binary renderings for an IPv6 result, 16-bit groups joined by `:`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Binary {
    pub ip: String,
    pub network_address: String,
    pub last_address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6SubnetResult {
    /// Always 6.
    #[serde(deserialize_with = "ipv6_version")]
    pub version: u8,
    /// Compressed form of the input address.
    pub ip: String,
    pub ip_expanded: String,
    pub prefix: u8,
    pub network_address_compressed: String,
    pub network_address_expanded: String,
    pub last_address_compressed: String,
    pub last_address_expanded: String,
    pub network_prefix_compressed: String,
    pub network_prefix_expanded: String,
    pub total_addresses: String,
    /// Equal to `total_addresses`.
    pub usable_addresses: String,
    pub binary: Ipv6Binary,
}

/// Result of a CIDR calculation, discriminated by address family.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubnetResult {
    V4(Ipv4SubnetResult),
    V6(Ipv6SubnetResult),
}

impl SubnetResult {
    pub fn version(&self) -> u8 {
        match self {
            SubnetResult::V4(r) => r.version,
            SubnetResult::V6(r) => r.version,
        }
    }

    pub fn as_ipv4(&self) -> Option<&Ipv4SubnetResult> {
        match self {
            SubnetResult::V4(r) => Some(r),
            SubnetResult::V6(_) => None,
        }
    }

    pub fn as_ipv6(&self) -> Option<&Ipv6SubnetResult> {
        match self {
            SubnetResult::V4(_) => None,
            SubnetResult::V6(r) => Some(r),
        }
    }
}

impl From<Ipv4SubnetResult> for SubnetResult {
    fn from(r: Ipv4SubnetResult) -> Self {
        SubnetResult::V4(r)
    }
}

impl From<Ipv6SubnetResult> for SubnetResult {
    fn from(r: Ipv6SubnetResult) -> Self {
        SubnetResult::V6(r)
    }
}
