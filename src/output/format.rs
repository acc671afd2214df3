//! Formatter: integers to canonical address strings.
//!
//! Output depends only on the numeric value, never on how it was entered.

use crate::models::Ipv6Groups;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Dotted-quad, most significant octet first.
pub fn format_ipv4(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Four zero-padded 8-bit groups joined by `.`.
pub fn format_binary32(addr: u32) -> String {
    addr.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// Eight zero-padded 16-bit groups joined by `:`.
pub fn format_binary128(addr: &Ipv6Groups) -> String {
    addr.groups()
        .iter()
        .map(|g| format!("{g:016b}"))
        .join(":")
}

/// Eight groups of four lowercase hex digits, no compression.
pub fn format_ipv6_expanded(addr: &Ipv6Groups) -> String {
    addr.groups().iter().map(|g| format!("{g:04x}")).join(":")
}

fn hex_groups(groups: &[u16]) -> String {
    groups.iter().map(|g| format!("{g:x}")).join(":")
}

/// Longest run of zero groups as `(start, len)`. Ties keep the first run.
fn longest_zero_run(groups: &[u16; 8]) -> (usize, usize) {
    let (mut best_start, mut best_len) = (0, 0);
    let (mut cur_start, mut cur_len) = (0, 0);
    for (i, g) in groups.iter().enumerate() {
        if *g == 0 {
            if cur_len == 0 {
                cur_start = i;
            }
            cur_len += 1;
            if cur_len > best_len {
                best_start = cur_start;
                best_len = cur_len;
            }
        } else {
            cur_len = 0;
        }
    }
    (best_start, best_len)
}

/// Canonical compressed form.
///
/// The longest run of two or more zero groups becomes `::`; on a tie the
/// first run wins. A lone zero group is never compressed.
pub fn format_ipv6_compressed(addr: &Ipv6Groups) -> String {
    if addr.is_zero() {
        return "::".to_string();
    }
    let groups = addr.groups();
    let (start, len) = longest_zero_run(groups);
    if len < 2 {
        return hex_groups(groups);
    }
    format!(
        "{head}::{tail}",
        head = hex_groups(&groups[..start]),
        tail = hex_groups(&groups[start + len..])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ipv6;

    fn compress(groups: [u16; 8]) -> String {
        format_ipv6_compressed(&Ipv6Groups(groups))
    }

    #[test]
    fn test_format_ipv4() {
        assert_eq!(format_ipv4(0xC0A8010A), "192.168.1.10");
        assert_eq!(format_ipv4(0), "0.0.0.0");
        assert_eq!(format_binary32(0xFFFFFF00), "11111111.11111111.11111111.00000000");
        assert_eq!(format_binary32(0x0A000001), "00001010.00000000.00000000.00000001");
    }

    #[test]
    fn test_compress_basic() {
        assert_eq!(compress([0; 8]), "::");
        assert_eq!(compress([0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]), "2001:db8::1");
        assert_eq!(compress([0, 0, 0, 0, 0, 0, 0, 1]), "::1");
        assert_eq!(compress([0xfe80, 0, 0, 0, 0, 0, 0, 0]), "fe80::");
        assert_eq!(compress([1, 2, 3, 4, 5, 6, 7, 8]), "1:2:3:4:5:6:7:8");
    }

    #[test]
    fn test_compress_single_zero_kept() {
        assert_eq!(compress([1, 0, 2, 0, 3, 0, 4, 0]), "1:0:2:0:3:0:4:0");
        assert_eq!(compress([0x2001, 0xdb8, 0, 1, 1, 1, 1, 1]), "2001:db8:0:1:1:1:1:1");
    }

    #[test]
    fn test_compress_tie_break_first_run() {
        assert_eq!(compress([1, 0, 0, 2, 0, 0, 3, 0]), "1::2:0:0:3:0");
        assert_eq!(compress([0, 0, 1, 0, 0, 0, 2, 3]), "0:0:1::2:3");
        assert_eq!(compress([0, 0, 1, 2, 3, 4, 0, 0]), "::1:2:3:4:0:0");
    }

    #[test]
    fn test_expanded() {
        let addr = Ipv6Groups([0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
        assert_eq!(
            format_ipv6_expanded(&addr),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            format_binary128(&addr),
            "0010000000000001:0000110110111000:0000000000000000:0000000000000000:\
             0000000000000000:0000000000000000:0000000000000000:0000000000000001"
        );
    }

    #[test]
    fn test_compress_expand_round_trip() {
        for groups in [
            [0, 0, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 2, 0, 0, 3, 0],
            [0xffff, 0, 0xffff, 0, 0, 0, 0, 0xabcd],
            [0, 1, 0, 0, 0, 0, 0, 0],
            [0x2001, 0xdb8, 0x85a3, 0, 0, 0x8a2e, 0x370, 0x7334],
        ] {
            let addr = Ipv6Groups(groups);
            let back = parse_ipv6(&format_ipv6_compressed(&addr)).unwrap();
            assert_eq!(format_ipv6_expanded(&back), format_ipv6_expanded(&addr));
        }
    }
}
