//! IPv4 dotted-quad parsing.

use super::digits_regex;
use crate::error::SubnetError;
use crate::models::is_contiguous_mask;

/// Parse a dotted-quad address into its 32-bit value.
///
/// Exactly four decimal segments, each `0..=255`. Leading zeros are accepted,
/// signs and any other characters are not.
pub fn parse_ipv4(input: &str) -> Result<u32, SubnetError> {
    let parts: Vec<&str> = input.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::InvalidIpv4);
    }

    let mut out: u32 = 0;
    for part in parts {
        if !digits_regex().is_match(part) {
            return Err(SubnetError::InvalidIpv4);
        }
        let octet: u8 = part.parse().map_err(|_| SubnetError::InvalidIpv4)?;
        out = (out << 8) | u32::from(octet);
    }
    Ok(out)
}

/// Parse a dotted-quad netmask, rejecting masks that are not a run of ones
/// followed by a run of zeros.
pub fn parse_ipv4_netmask(input: &str) -> Result<u32, SubnetError> {
    let mask = parse_ipv4(input)?;
    if !is_contiguous_mask(mask) {
        log::debug!("netmask {input:?} is not contiguous");
        return Err(SubnetError::InvalidNetmask);
    }
    Ok(mask)
}
