//! Mask Arithmetic: build full result records from an address and prefix.

use crate::error::SubnetError;
use crate::models::{
    CalcOptions, Ipv4Binary, Ipv4Net, Ipv4SubnetResult, Ipv6Binary, Ipv6Groups, Ipv6Net,
    Ipv6SubnetResult,
};
use crate::output::{
    format_binary128, format_binary32, format_ipv4, format_ipv6_compressed, format_ipv6_expanded,
};

/// Compute an IPv4 subnet from a numeric address.
///
/// # Arguments
/// * `addr` - The address, host bits included
/// * `prefix` - Prefix length, `0..=32`
/// * `options` - Host counting rule for /31 networks
///
/// # Returns
/// * `Ok(Ipv4SubnetResult)` - Fully populated result
/// * `Err(SubnetError::InvalidPrefix)` - If `prefix > 32`
pub fn calc_ipv4_subnet(
    addr: u32,
    prefix: u8,
    options: &CalcOptions,
) -> Result<Ipv4SubnetResult, SubnetError> {
    let net = Ipv4Net::new(addr, prefix)?;
    let mask = net.mask();
    let network = net.network();
    let broadcast = net.broadcast();
    let hosts = net.hosts(options.host_rule);
    log::debug!(
        "calc_ipv4_subnet({net}) network={} rule={}",
        format_ipv4(network),
        options.host_rule
    );

    Ok(Ipv4SubnetResult {
        version: 4,
        ip: format_ipv4(addr),
        prefix,
        network_address: format_ipv4(network),
        broadcast_address: format_ipv4(broadcast),
        first_host: hosts.first.map(format_ipv4),
        last_host: hosts.last.map(format_ipv4),
        subnet_mask: format_ipv4(mask),
        wildcard_mask: format_ipv4(net.wildcard()),
        total_addresses: net.total().to_string(),
        usable_addresses: hosts.usable.to_string(),
        binary: Ipv4Binary {
            ip: format_binary32(addr),
            subnet_mask: format_binary32(mask),
            network_address: format_binary32(network),
            broadcast_address: format_binary32(broadcast),
        },
    })
}

/// Compute an IPv6 subnet from a numeric address.
///
/// Every address in the block counts as usable, so `usable_addresses` always
/// equals `total_addresses`.
pub fn calc_ipv6_subnet(addr: Ipv6Groups, prefix: u8) -> Result<Ipv6SubnetResult, SubnetError> {
    let net = Ipv6Net::new(addr, prefix)?;
    let network = net.network();
    let last = net.last();
    let total = net.total().to_string();

    let network_compressed = format_ipv6_compressed(&network);
    let network_expanded = format_ipv6_expanded(&network);
    log::debug!("calc_ipv6_subnet() network={network_compressed}/{prefix}");

    Ok(Ipv6SubnetResult {
        version: 6,
        ip: format_ipv6_compressed(&addr),
        ip_expanded: format_ipv6_expanded(&addr),
        prefix,
        network_prefix_compressed: format!("{network_compressed}/{prefix}"),
        network_prefix_expanded: format!("{network_expanded}/{prefix}"),
        network_address_compressed: network_compressed,
        network_address_expanded: network_expanded,
        last_address_compressed: format_ipv6_compressed(&last),
        last_address_expanded: format_ipv6_expanded(&last),
        usable_addresses: total.clone(),
        total_addresses: total,
        binary: Ipv6Binary {
            ip: format_binary128(&addr),
            network_address: format_binary128(&network),
            last_address: format_binary128(&last),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HostRule;

    #[test]
    fn test_ipv4_slash_24() {
        let r = calc_ipv4_subnet(0xC0A8010A, 24, &CalcOptions::default()).unwrap();
        assert_eq!(r.version, 4);
        assert_eq!(r.ip, "192.168.1.10");
        assert_eq!(r.network_address, "192.168.1.0");
        assert_eq!(r.broadcast_address, "192.168.1.255");
        assert_eq!(r.subnet_mask, "255.255.255.0");
        assert_eq!(r.wildcard_mask, "0.0.0.255");
        assert_eq!(r.first_host.as_deref(), Some("192.168.1.1"));
        assert_eq!(r.last_host.as_deref(), Some("192.168.1.254"));
        assert_eq!(r.total_addresses, "256");
        assert_eq!(r.usable_addresses, "254");
        assert_eq!(r.binary.subnet_mask, "11111111.11111111.11111111.00000000");
        assert_eq!(r.binary.network_address, "11000000.10101000.00000001.00000000");
    }

    #[test]
    fn test_ipv4_slash_0() {
        let r = calc_ipv4_subnet(0x01020304, 0, &CalcOptions::default()).unwrap();
        assert_eq!(r.network_address, "0.0.0.0");
        assert_eq!(r.broadcast_address, "255.255.255.255");
        assert_eq!(r.subnet_mask, "0.0.0.0");
        assert_eq!(r.wildcard_mask, "255.255.255.255");
        assert_eq!(r.first_host.as_deref(), Some("0.0.0.1"));
        assert_eq!(r.last_host.as_deref(), Some("255.255.255.254"));
        assert_eq!(r.total_addresses, "4294967296");
    }

    #[test]
    fn test_ipv4_slash_31_rules() {
        let rfc = calc_ipv4_subnet(0x0A000001, 31, &CalcOptions::default()).unwrap();
        assert_eq!(rfc.usable_addresses, "2");
        assert_eq!(rfc.first_host.as_deref(), Some("10.0.0.0"));
        assert_eq!(rfc.last_host.as_deref(), Some("10.0.0.1"));

        let opts = CalcOptions::with_host_rule(HostRule::Traditional);
        let trad = calc_ipv4_subnet(0x0A000001, 31, &opts).unwrap();
        assert_eq!(trad.usable_addresses, "0");
        assert_eq!(trad.first_host, None);
        assert_eq!(trad.last_host, None);
        assert_eq!(trad.total_addresses, "2");
    }

    #[test]
    fn test_ipv4_slash_32() {
        let r = calc_ipv4_subnet(0x08080808, 32, &CalcOptions::default()).unwrap();
        assert_eq!(r.usable_addresses, "1");
        assert_eq!(r.first_host.as_deref(), Some("8.8.8.8"));
        assert_eq!(r.last_host.as_deref(), Some("8.8.8.8"));
        assert_eq!(r.wildcard_mask, "0.0.0.0");
    }

    #[test]
    fn test_ipv4_prefix_out_of_range() {
        assert_eq!(
            calc_ipv4_subnet(0, 33, &CalcOptions::default()),
            Err(SubnetError::InvalidPrefix)
        );
    }

    #[test]
    fn test_ipv6_slash_64() {
        let addr = Ipv6Groups([0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
        let r = calc_ipv6_subnet(addr, 64).unwrap();
        assert_eq!(r.version, 6);
        assert_eq!(r.ip, "2001:db8::1");
        assert_eq!(r.ip_expanded, "2001:0db8:0000:0000:0000:0000:0000:0001");
        assert_eq!(r.network_address_compressed, "2001:db8::");
        assert_eq!(r.network_prefix_compressed, "2001:db8::/64");
        assert_eq!(
            r.network_prefix_expanded,
            "2001:0db8:0000:0000:0000:0000:0000:0000/64"
        );
        assert_eq!(r.last_address_compressed, "2001:db8::ffff:ffff:ffff:ffff");
        assert_eq!(r.total_addresses, "18446744073709551616");
        assert_eq!(r.usable_addresses, r.total_addresses);
    }

    #[test]
    fn test_ipv6_extremes() {
        let r = calc_ipv6_subnet(Ipv6Groups([0, 0, 0, 0, 0, 0, 0, 1]), 0).unwrap();
        assert_eq!(r.network_address_compressed, "::");
        assert_eq!(r.last_address_compressed, "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(r.total_addresses, "340282366920938463463374607431768211456");

        let r = calc_ipv6_subnet(Ipv6Groups([0, 0, 0, 0, 0, 0, 0, 1]), 128).unwrap();
        assert_eq!(r.network_address_compressed, "::1");
        assert_eq!(r.last_address_compressed, "::1");
        assert_eq!(r.total_addresses, "1");

        assert_eq!(
            calc_ipv6_subnet(Ipv6Groups::ZERO, 129),
            Err(SubnetError::InvalidPrefix)
        );
    }
}
