//! IPv4 mask arithmetic.
//!
//! Provides [`Ipv4Net`] for an address together with its prefix length, along
//! with the free functions it is built from.

use super::count::{address_count, AddressCount};
use super::options::HostRule;
use crate::error::SubnetError;
use num_bigint::BigUint;
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix)
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Recover the prefix length from a subnet mask.
///
/// Counts the leading ones and requires the mask rebuilt from that count to
/// match exactly, so masks with holes such as `255.0.255.0` are rejected.
pub fn mask_to_prefix(mask: u32) -> Result<u8, SubnetError> {
    let prefix = mask.leading_ones() as u8;
    if get_cidr_mask(prefix)? != mask {
        return Err(SubnetError::InvalidNetmask);
    }
    Ok(prefix)
}

/// True when the bit pattern is a run of ones followed by a run of zeros.
pub fn is_contiguous_mask(mask: u32) -> bool {
    let inv = !mask;
    inv & inv.wrapping_add(1) == 0
}

/// Usable host range of a subnet. `first`/`last` are `None` when the subnet
/// has no usable hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRange {
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub usable: AddressCount,
}

/// IPv4 address with its prefix length.
///
/// Only [`Ipv4Net::new`] builds one, so the prefix is always 0-32 and the mask
/// always matches it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Net {
    addr: u32,
    prefix: u8,
    mask: u32,
}

impl Ipv4Net {
    pub fn new(addr: u32, prefix: u8) -> Result<Ipv4Net, SubnetError> {
        let mask = get_cidr_mask(prefix)?;
        Ok(Ipv4Net { addr, prefix, mask })
    }

    /// The address as entered, host bits included.
    pub fn addr(&self) -> u32 {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn wildcard(&self) -> u32 {
        !self.mask()
    }

    /// Lowest address in the subnet.
    pub fn network(&self) -> u32 {
        self.addr & self.mask()
    }

    /// Highest address in the subnet.
    pub fn broadcast(&self) -> u32 {
        self.network() | self.wildcard()
    }

    pub fn total(&self) -> AddressCount {
        address_count(MAX_LENGTH, self.prefix)
    }

    /// Usable hosts under the given counting rule.
    ///
    /// A /32 is the address itself. A /31 holds two hosts under RFC 3021 and
    /// none under the traditional rule. Anything larger reserves the network
    /// and broadcast addresses.
    pub fn hosts(&self, rule: HostRule) -> HostRange {
        match (self.prefix, rule) {
            (32, _) => HostRange {
                first: Some(self.addr),
                last: Some(self.addr),
                usable: BigUint::from(1u8),
            },
            (31, HostRule::Rfc3021) => HostRange {
                first: Some(self.network()),
                last: Some(self.broadcast()),
                usable: BigUint::from(2u8),
            },
            (31, HostRule::Traditional) => HostRange {
                first: None,
                last: None,
                usable: BigUint::from(0u8),
            },
            _ => {
                let total = self.total();
                let reserved = BigUint::from(2u8);
                let usable = if total >= reserved {
                    total - reserved
                } else {
                    BigUint::from(0u8)
                };
                HostRange {
                    first: Some(self.network().wrapping_add(1)),
                    last: Some(self.broadcast().wrapping_sub(1)),
                    usable,
                }
            }
        }
    }
}

impl fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.addr), self.prefix)
    }
}
