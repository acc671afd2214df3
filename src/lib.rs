//! IPv4/IPv6 subnet calculation engine.
//!
//! Given a CIDR literal, or an IPv4 address plus dotted netmask, derives the
//! network and last address, usable host range, masks, exact address counts
//! and the textual forms of each.
//!
//! ```
//! use ip_subnet_calc::{calc_from_cidr, CalcOptions};
//! let r = calc_from_cidr("192.168.1.10/24", &CalcOptions::default()).unwrap();
//! let r = r.as_ipv4().unwrap();
//! assert_eq!(r.network_address, "192.168.1.0");
//! assert_eq!(r.usable_addresses, "254");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod processing;

pub use error::SubnetError;
pub use models::{
    CalcOptions, HostRule, Ipv4AddressMeta, Ipv4AddressType, Ipv4Class, Ipv4Input,
    Ipv4SubnetResult, Ipv6Groups, Ipv6SubnetResult, SubnetResult,
};
pub use output::{format_ipv6_compressed, format_ipv6_expanded};
pub use processing::{calc_ipv4_subnet, calc_ipv6_subnet};

use config::{Config, OutputFormat, Query};
use models::{get_cidr_mask, mask_to_prefix, MAX_LENGTH, MAX_LENGTH_V6};
use output::format_ipv4;
use parser::{
    parse_ipv4, parse_ipv4_netmask, parse_ipv6, parse_prefix, split_cidr,
    strip_zone_and_brackets,
};
use processing::classify_ipv4;
use std::error::Error;

/// Calculate a subnet from CIDR text such as `192.168.1.10/24`,
/// `2001:db8::1/64` or `[fe80::1%eth0]/64`.
///
/// The zone ID and one pair of brackets are removed here. The family is IPv6
/// when what remains contains `:`, IPv4 otherwise.
pub fn calc_from_cidr(input: &str, options: &CalcOptions) -> Result<SubnetResult, SubnetError> {
    let (addr, prefix) = split_cidr(input)?;
    let prefix = parse_prefix(prefix)?;
    let addr = strip_zone_and_brackets(addr);

    if addr.contains(':') {
        if prefix > MAX_LENGTH_V6 {
            return Err(SubnetError::InvalidPrefix);
        }
        let addr = parse_ipv6(addr)?;
        Ok(calc_ipv6_subnet(addr, prefix)?.into())
    } else {
        if prefix > MAX_LENGTH {
            return Err(SubnetError::InvalidPrefix);
        }
        let addr = parse_ipv4(addr)?;
        Ok(calc_ipv4_subnet(addr, prefix, options)?.into())
    }
}

/// Calculate an IPv4 subnet from an address and a dotted-quad netmask such as
/// `10.0.0.1` and `255.255.255.0`.
pub fn calc_from_ipv4_netmask(
    address: &str,
    netmask: &str,
    options: &CalcOptions,
) -> Result<Ipv4SubnetResult, SubnetError> {
    if address.trim().is_empty() || netmask.trim().is_empty() {
        return Err(SubnetError::InvalidInput);
    }
    let addr = parse_ipv4(address)?;
    let mask = parse_ipv4_netmask(netmask)?;
    let prefix = mask_to_prefix(mask)?;
    calc_ipv4_subnet(addr, prefix, options)
}

/// Dotted-quad mask for a prefix length, e.g. `24` to `255.255.255.0`.
pub fn ipv4_prefix_to_mask_string(prefix: u8) -> Result<String, SubnetError> {
    Ok(format_ipv4(get_cidr_mask(prefix)?))
}

/// Classify an IPv4 address given as text or as a `u32`.
pub fn get_ipv4_address_meta<'a>(
    addr: impl Into<Ipv4Input<'a>>,
) -> Result<Ipv4AddressMeta, SubnetError> {
    let addr = match addr.into() {
        Ipv4Input::Text(s) => parse_ipv4(s)?,
        Ipv4Input::Value(v) => v,
    };
    Ok(classify_ipv4(addr))
}

/// Run one query from the command line and return the rendered report.
pub fn run(config: &Config) -> Result<String, Box<dyn Error>> {
    let result: SubnetResult = match &config.query {
        Query::Cidr(cidr) => calc_from_cidr(cidr, &config.options)?,
        Query::Netmask { address, netmask } => {
            calc_from_ipv4_netmask(address, netmask, &config.options)?.into()
        }
    };
    log::debug!("Calculated {}", result_label(&result));

    // Classification only applies to IPv4.
    let meta = match (&result, config.show_meta) {
        (SubnetResult::V4(r), true) => Some(get_ipv4_address_meta(r.ip.as_str())?),
        _ => None,
    };

    let report = match config.output {
        OutputFormat::Json => match meta {
            Some(meta) => output::render_json(&serde_json::json!({
                "result": result,
                "meta": meta,
            }))?,
            None => output::render_json(&result)?,
        },
        OutputFormat::Text => match meta {
            Some(meta) => format!(
                "{}\n{}",
                output::render_result(&result),
                output::render_meta(&meta)
            ),
            None => output::render_result(&result),
        },
    };
    Ok(report)
}

fn result_label(result: &SubnetResult) -> String {
    match result {
        SubnetResult::V4(r) => format!("{}/{}", r.network_address, r.prefix),
        SubnetResult::V6(r) => r.network_prefix_compressed.clone(),
    }
}
