//! Classifier: legacy class and address type of an IPv4 address.

use crate::models::{Ipv4AddressMeta, Ipv4AddressType, Ipv4Class};

/// `(network, mask)` pairs for the RFC 1918 private ranges.
const PRIVATE_RANGES: [(u32, u32); 3] = [
    (0x0A00_0000, 0xFF00_0000), // 10.0.0.0/8
    (0xAC10_0000, 0xFFF0_0000), // 172.16.0.0/12
    (0xC0A8_0000, 0xFFFF_0000), // 192.168.0.0/16
];
const LOOPBACK: (u32, u32) = (0x7F00_0000, 0xFF00_0000);
const LINK_LOCAL: (u32, u32) = (0xA9FE_0000, 0xFFFF_0000);

fn in_range(addr: u32, (network, mask): (u32, u32)) -> bool {
    addr & mask == network
}

/// Class by leading octet. 0 and 127 are outside every A-D range and fall
/// through to E.
fn ipv4_class(first: u8) -> Ipv4Class {
    match first {
        1..=126 => Ipv4Class::A,
        128..=191 => Ipv4Class::B,
        192..=223 => Ipv4Class::C,
        224..=239 => Ipv4Class::D,
        _ => Ipv4Class::E,
    }
}

/// Classify a 32-bit address.
///
/// When several types apply, the first of private, loopback, link-local,
/// multicast, experimental, public wins; anything left is `Other`.
pub fn classify_ipv4(addr: u32) -> Ipv4AddressMeta {
    let first = (addr >> 24) as u8;
    let is_private = PRIVATE_RANGES.iter().any(|r| in_range(addr, *r));

    let address_type = if is_private {
        Ipv4AddressType::Private
    } else if in_range(addr, LOOPBACK) {
        Ipv4AddressType::Loopback
    } else if in_range(addr, LINK_LOCAL) {
        Ipv4AddressType::LinkLocal
    } else {
        match first {
            224..=239 => Ipv4AddressType::Multicast,
            240..=255 => Ipv4AddressType::Experimental,
            1..=223 => Ipv4AddressType::Public,
            _ => Ipv4AddressType::Other,
        }
    };

    Ipv4AddressMeta {
        ipv4_class: ipv4_class(first),
        address_type,
        is_private,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ipv4;

    fn meta(s: &str) -> Ipv4AddressMeta {
        classify_ipv4(parse_ipv4(s).unwrap())
    }

    #[test]
    fn test_class_boundaries() {
        assert_eq!(meta("0.1.2.3").ipv4_class, Ipv4Class::E);
        assert_eq!(meta("1.0.0.0").ipv4_class, Ipv4Class::A);
        assert_eq!(meta("126.255.255.255").ipv4_class, Ipv4Class::A);
        assert_eq!(meta("127.0.0.1").ipv4_class, Ipv4Class::E);
        assert_eq!(meta("128.0.0.0").ipv4_class, Ipv4Class::B);
        assert_eq!(meta("191.255.0.0").ipv4_class, Ipv4Class::B);
        assert_eq!(meta("192.0.0.0").ipv4_class, Ipv4Class::C);
        assert_eq!(meta("223.1.1.1").ipv4_class, Ipv4Class::C);
        assert_eq!(meta("224.0.0.1").ipv4_class, Ipv4Class::D);
        assert_eq!(meta("239.255.255.255").ipv4_class, Ipv4Class::D);
        assert_eq!(meta("240.0.0.0").ipv4_class, Ipv4Class::E);
        assert_eq!(meta("255.255.255.255").ipv4_class, Ipv4Class::E);
    }

    #[test]
    fn test_private_ranges() {
        for s in ["10.0.0.1", "172.16.0.1", "172.31.255.255", "192.168.100.1"] {
            let m = meta(s);
            assert!(m.is_private, "{s}");
            assert_eq!(m.address_type, Ipv4AddressType::Private);
        }
        for s in ["172.15.255.255", "172.32.0.0", "192.169.0.1", "11.0.0.1"] {
            assert!(!meta(s).is_private, "{s}");
        }
    }

    #[test]
    fn test_address_types() {
        assert_eq!(meta("127.0.0.1").address_type, Ipv4AddressType::Loopback);
        assert_eq!(meta("169.254.10.1").address_type, Ipv4AddressType::LinkLocal);
        assert_eq!(meta("224.0.0.251").address_type, Ipv4AddressType::Multicast);
        assert_eq!(meta("250.1.2.3").address_type, Ipv4AddressType::Experimental);
        assert_eq!(meta("8.8.8.8").address_type, Ipv4AddressType::Public);
        assert_eq!(meta("169.253.0.1").address_type, Ipv4AddressType::Public);
        assert_eq!(meta("0.0.0.0").address_type, Ipv4AddressType::Other);
    }
}
