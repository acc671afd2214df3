//! Error kinds returned by the subnet engine.
//!
//! Every public entry point either returns a complete result or exactly one
//! [`SubnetError`]. Callers branch on [`SubnetError::code`] to render their own
//! message.

use thiserror::Error;

/// Closed set of failures the engine can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubnetError {
    /// Empty or whitespace-only input.
    #[error("input is empty")]
    InvalidInput,
    /// Missing or malformed `/prefix` suffix.
    #[error("expected address/prefix")]
    InvalidCidr,
    /// Prefix is not an unsigned integer or is out of range for the family.
    #[error("invalid prefix length")]
    InvalidPrefix,
    #[error("invalid IPv4 address")]
    InvalidIpv4,
    #[error("invalid IPv6 address")]
    InvalidIpv6,
    /// Dotted-quad mask is not a contiguous run of ones followed by zeros.
    #[error("invalid netmask")]
    InvalidNetmask,
}

impl SubnetError {
    /// Stable snake_case code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SubnetError::InvalidInput => "invalid_input",
            SubnetError::InvalidCidr => "invalid_cidr",
            SubnetError::InvalidPrefix => "invalid_prefix",
            SubnetError::InvalidIpv4 => "invalid_ipv4",
            SubnetError::InvalidIpv6 => "invalid_ipv6",
            SubnetError::InvalidNetmask => "invalid_netmask",
        }
    }
}
