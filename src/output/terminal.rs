//! Terminal output utilities.
//!
//! Renders result records as aligned `label: value` rows or as JSON.

use crate::models::{Ipv4AddressMeta, Ipv4SubnetResult, Ipv6SubnetResult, SubnetResult};
use colored::Colorize;
use serde::Serialize;
use std::error::Error;

/// Width of the label column.
const LABEL_WIDTH: usize = 20;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn row(label: &str, value: &str) -> String {
    format!(
        "{label}: {value}",
        label = format_field(label, LABEL_WIDTH).as_str().cyan(),
    )
}

fn ipv4_rows(r: &Ipv4SubnetResult) -> Vec<String> {
    vec![
        row("Address", &format!("{}/{}", r.ip, r.prefix)),
        row("Network", &r.network_address),
        row("Broadcast", &r.broadcast_address),
        row("First host", r.first_host.as_deref().unwrap_or("-")),
        row("Last host", r.last_host.as_deref().unwrap_or("-")),
        row("Subnet mask", &r.subnet_mask),
        row("Wildcard mask", &r.wildcard_mask),
        row("Total addresses", &r.total_addresses),
        row("Usable hosts", &r.usable_addresses),
        row("Binary address", &r.binary.ip),
        row("Binary mask", &r.binary.subnet_mask),
        row("Binary network", &r.binary.network_address),
        row("Binary broadcast", &r.binary.broadcast_address),
    ]
}

fn ipv6_rows(r: &Ipv6SubnetResult) -> Vec<String> {
    vec![
        row("Address", &format!("{}/{}", r.ip, r.prefix)),
        row("Expanded", &r.ip_expanded),
        row("Network", &r.network_prefix_compressed),
        row("Network expanded", &r.network_prefix_expanded),
        row("Last address", &r.last_address_compressed),
        row("Last expanded", &r.last_address_expanded),
        row("Total addresses", &r.total_addresses),
        row("Usable addresses", &r.usable_addresses),
        row("Binary address", &r.binary.ip),
        row("Binary network", &r.binary.network_address),
        row("Binary last", &r.binary.last_address),
    ]
}

/// Render a result as one line per field.
pub fn render_result(result: &SubnetResult) -> String {
    let rows = match result {
        SubnetResult::V4(r) => ipv4_rows(r),
        SubnetResult::V6(r) => ipv6_rows(r),
    };
    rows.join("\n")
}

/// Render an IPv4 classification as rows.
pub fn render_meta(meta: &Ipv4AddressMeta) -> String {
    [
        row("Class", &meta.ipv4_class.to_string()),
        row("Type", &meta.address_type.to_string()),
        row("Private", &meta.is_private.to_string()),
    ]
    .join("\n")
}

/// Pretty JSON for any serializable record.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calc_from_cidr, get_ipv4_address_meta, CalcOptions, HostRule};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 8), "    test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "  42");
    }

    #[test]
    fn test_render_traditional_slash_31() {
        colored::control::set_override(false);
        let opts = CalcOptions::with_host_rule(HostRule::Traditional);
        let r = calc_from_cidr("10.0.0.0/31", &opts).unwrap();
        let text = render_result(&r);
        assert!(text.contains("          First host: -"));
        assert!(text.contains("        Usable hosts: 0"));
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn test_render_ipv6() {
        colored::control::set_override(false);
        let r = calc_from_cidr("2001:db8::1/64", &CalcOptions::default()).unwrap();
        let text = render_result(&r);
        assert!(text.contains("             Network: 2001:db8::/64"));
    }

    #[test]
    fn test_render_meta_and_json() {
        colored::control::set_override(false);
        let meta = get_ipv4_address_meta("169.254.1.1").unwrap();
        assert!(render_meta(&meta).contains("Type: linkLocal"));
        let json = render_json(&meta).unwrap();
        assert!(json.contains(r#""addressType": "linkLocal""#));
    }
}
