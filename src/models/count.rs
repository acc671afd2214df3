//! Exact address counts.
//!
//! An IPv6 /0 holds 2^128 addresses, one more than `u128` can represent, so
//! counts are kept as [`BigUint`].

use num_bigint::BigUint;

/// Number of addresses in a block, exact for any family width.
pub type AddressCount = BigUint;

/// `2^(width - prefix)`. Callers validate `prefix <= width`.
pub fn address_count(width: u8, prefix: u8) -> AddressCount {
    BigUint::from(1u8) << u32::from(width.saturating_sub(prefix))
}
