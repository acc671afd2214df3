//! IPv6 colon-hex parsing.

use super::hextet_regex;
use super::ipv4::parse_ipv4;
use crate::error::SubnetError;
use crate::models::Ipv6Groups;

/// Remove a `%zone` suffix and one pair of surrounding brackets.
///
/// The zone may sit inside or outside the brackets (`[fe80::1%eth0]` and
/// `[fe80::1]%eth0`). Only a single bracket pair is removed, so `[[::1]]`
/// keeps its inner brackets and fails address parsing.
pub fn strip_zone_and_brackets(input: &str) -> &str {
    let s = input.trim();
    let (addr, zone) = match s.find('%') {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    };
    if let Some(inner) = addr.strip_prefix('[') {
        if let Some(inner) = inner.strip_suffix(']') {
            return inner;
        }
        if zone.ends_with(']') {
            return inner;
        }
    }
    addr
}

fn parse_hextet(s: &str) -> Result<u16, SubnetError> {
    if !hextet_regex().is_match(s) {
        return Err(SubnetError::InvalidIpv6);
    }
    u16::from_str_radix(s, 16).map_err(|_| SubnetError::InvalidIpv6)
}

fn parse_hextets(s: &str) -> Result<Vec<u16>, SubnetError> {
    s.split(':')
        .filter(|t| !t.is_empty())
        .map(parse_hextet)
        .collect()
}

/// Split off a trailing dotted-quad, returning the remaining text and the two
/// groups it contributes.
///
/// A `::` directly before the dotted quad is kept, so the IPv4-compatible
/// forms `::1.2.3.4` and `1::1.2.3.4` are accepted alongside
/// `::ffff:1.2.3.4`. A single separating `:` is dropped.
fn split_embedded_ipv4(s: &str) -> Result<(&str, Option<[u16; 2]>), SubnetError> {
    if !s.contains('.') {
        return Ok((s, None));
    }
    let last_colon = s.rfind(':').ok_or(SubnetError::InvalidIpv6)?;
    let v4 = parse_ipv4(&s[last_colon + 1..])?;
    let groups = [(v4 >> 16) as u16, (v4 & 0xffff) as u16];

    // Keep a `::` that directly precedes the dotted quad, drop a lone separator.
    let head = &s[..=last_colon];
    let head = if head.ends_with("::") {
        head
    } else {
        &head[..last_colon]
    };
    Ok((head, Some(groups)))
}

/// Parse an IPv6 address into eight 16-bit groups.
///
/// Accepts one `::` run and a trailing embedded IPv4 address. Hex digits may
/// be in either case. Brackets and zone IDs are not accepted here; remove them
/// first with [`strip_zone_and_brackets`].
pub fn parse_ipv6(input: &str) -> Result<Ipv6Groups, SubnetError> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(SubnetError::InvalidIpv6);
    }

    let (s, embedded) = split_embedded_ipv4(&s)?;
    let v4_groups: &[u16] = match &embedded {
        Some(groups) => groups,
        None => &[],
    };

    let pieces: Vec<&str> = s.split("::").collect();
    if pieces.len() > 2 {
        return Err(SubnetError::InvalidIpv6);
    }
    let compressed = pieces.len() == 2;

    let left = parse_hextets(pieces[0])?;
    let right = match pieces.get(1) {
        Some(piece) => parse_hextets(piece)?,
        None => Vec::new(),
    };

    let provided = left.len() + right.len() + v4_groups.len();
    if provided > 8 || (!compressed && provided != 8) {
        return Err(SubnetError::InvalidIpv6);
    }
    let zeros = if compressed { 8 - provided } else { 0 };

    let groups: Vec<u16> = left
        .into_iter()
        .chain(std::iter::repeat(0).take(zeros))
        .chain(right)
        .chain(v4_groups.iter().copied())
        .collect();

    let groups: [u16; 8] = groups.try_into().map_err(|_| SubnetError::InvalidIpv6)?;
    Ok(Ipv6Groups(groups))
}
