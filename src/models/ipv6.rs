//! IPv6 addresses as eight 16-bit groups.
//!
//! [`Ipv6Groups`] implements the bitwise operators group by group, and its
//! derived ordering matches numeric ordering because group 0 is the most
//! significant.

use super::count::{address_count, AddressCount};
use crate::error::SubnetError;
use std::ops::{BitAnd, BitOr, Not};

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Bits per group.
const GROUP_BITS: u8 = 16;

/// A 128-bit address, most significant group first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv6Groups(pub [u16; 8]);

impl Ipv6Groups {
    pub const ZERO: Ipv6Groups = Ipv6Groups([0; 8]);
    pub const MAX: Ipv6Groups = Ipv6Groups([u16::MAX; 8]);

    /// Mask with the top `prefix` bits set.
    pub fn mask(prefix: u8) -> Result<Ipv6Groups, SubnetError> {
        if prefix > MAX_LENGTH_V6 {
            return Err(SubnetError::InvalidPrefix);
        }
        let mut groups = [0u16; 8];
        for (i, group) in groups.iter_mut().enumerate() {
            let start = i as u8 * GROUP_BITS;
            let bits = prefix.saturating_sub(start).min(GROUP_BITS);
            if bits > 0 {
                *group = u16::MAX << (GROUP_BITS - bits);
            }
        }
        Ok(Ipv6Groups(groups))
    }

    pub fn groups(&self) -> &[u16; 8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|g| *g == 0)
    }
}

impl From<[u16; 8]> for Ipv6Groups {
    fn from(groups: [u16; 8]) -> Self {
        Ipv6Groups(groups)
    }
}

impl BitAnd for Ipv6Groups {
    type Output = Ipv6Groups;

    fn bitand(self, rhs: Ipv6Groups) -> Ipv6Groups {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o &= r;
        }
        Ipv6Groups(out)
    }
}

impl BitOr for Ipv6Groups {
    type Output = Ipv6Groups;

    fn bitor(self, rhs: Ipv6Groups) -> Ipv6Groups {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o |= r;
        }
        Ipv6Groups(out)
    }
}

impl Not for Ipv6Groups {
    type Output = Ipv6Groups;

    fn not(self) -> Ipv6Groups {
        Ipv6Groups(self.0.map(|g| !g))
    }
}

/// IPv6 address with its prefix length (0-128), validated by [`Ipv6Net::new`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6Net {
    addr: Ipv6Groups,
    prefix: u8,
    mask: Ipv6Groups,
}

impl Ipv6Net {
    pub fn new(addr: Ipv6Groups, prefix: u8) -> Result<Ipv6Net, SubnetError> {
        let mask = Ipv6Groups::mask(prefix)?;
        Ok(Ipv6Net { addr, prefix, mask })
    }

    pub fn addr(&self) -> Ipv6Groups {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> Ipv6Groups {
        self.mask
    }

    pub fn network(&self) -> Ipv6Groups {
        self.addr & self.mask()
    }

    /// Numeric upper bound of the block. IPv6 has no broadcast address.
    pub fn last(&self) -> Ipv6Groups {
        self.network() | !self.mask()
    }

    /// Every address in the block counts as usable, so this is also the
    /// usable count.
    pub fn total(&self) -> AddressCount {
        address_count(MAX_LENGTH_V6, self.prefix)
    }
}
