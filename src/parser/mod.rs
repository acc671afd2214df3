//! Address Parser: text to fixed-width integers.
//!
//! - [`ipv4`] - dotted-quad addresses and netmasks
//! - [`ipv6`] - colon-hex addresses with `::`, zone IDs and embedded IPv4
//! - [`cidr`] - `address/prefix` splitting

mod cidr;
mod ipv4;
mod ipv6;

use regex::Regex;
use std::sync::OnceLock;

pub use cidr::{parse_prefix, split_cidr};
pub use ipv4::{parse_ipv4, parse_ipv4_netmask};
pub use ipv6::{parse_ipv6, strip_zone_and_brackets};

/// Unsigned decimal, no sign.
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

/// One IPv6 group, already lower-cased.
static HEXTET_REGEX: OnceLock<Regex> = OnceLock::new();

fn digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

fn hextet_regex() -> &'static Regex {
    HEXTET_REGEX.get_or_init(|| Regex::new(r"^[0-9a-f]{1,4}$").expect("Invalid Regex"))
}
