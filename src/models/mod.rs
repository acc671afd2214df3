//! Value types for the subnet engine.
//!
//! - [`Ipv4Net`] - IPv4 address with prefix and its mask arithmetic
//! - [`Ipv6Groups`] and [`Ipv6Net`] - IPv6 as eight 16-bit groups
//! - [`SubnetResult`] - result records returned to callers
//! - [`Ipv4AddressMeta`] - IPv4 classification

mod count;
mod ipv4;
mod ipv6;
mod meta;
mod options;
mod result;

// Re-export public types
pub use count::{address_count, AddressCount};
pub use ipv4::{
    get_cidr_mask, is_contiguous_mask, mask_to_prefix, HostRange, Ipv4Net, MAX_LENGTH,
};
pub use ipv6::{Ipv6Groups, Ipv6Net, MAX_LENGTH_V6};
pub use meta::{Ipv4AddressMeta, Ipv4AddressType, Ipv4Class, Ipv4Input};
pub use options::{CalcOptions, HostRule};
pub use result::{Ipv4Binary, Ipv4SubnetResult, Ipv6Binary, Ipv6SubnetResult, SubnetResult};
