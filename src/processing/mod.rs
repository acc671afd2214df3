//! Subnet calculation logic.
//!
//! - [`subnet`] - mask arithmetic producing result records
//! - [`classify`] - IPv4 class and address type

mod classify;
mod subnet;

// Re-export public functions
pub use classify::classify_ipv4;
pub use subnet::{calc_ipv4_subnet, calc_ipv6_subnet};
