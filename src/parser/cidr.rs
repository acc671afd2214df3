//! CIDR splitting.

use super::digits_regex;
use crate::error::SubnetError;

/// Split `address/prefix` at the last `/`, trimming both sides.
pub fn split_cidr(input: &str) -> Result<(&str, &str), SubnetError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(SubnetError::InvalidInput);
    }
    let (addr, prefix) = s.rsplit_once('/').ok_or(SubnetError::InvalidCidr)?;
    let (addr, prefix) = (addr.trim(), prefix.trim());
    if addr.is_empty() || prefix.is_empty() {
        return Err(SubnetError::InvalidCidr);
    }
    Ok((addr, prefix))
}

/// Parse an unsigned decimal prefix length. The family range is checked by
/// the caller.
pub fn parse_prefix(input: &str) -> Result<u8, SubnetError> {
    if !digits_regex().is_match(input) {
        return Err(SubnetError::InvalidPrefix);
    }
    input.parse().map_err(|_| SubnetError::InvalidPrefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cidr() {
        assert_eq!(split_cidr("10.0.0.1/8").unwrap(), ("10.0.0.1", "8"));
        assert_eq!(split_cidr(" 10.0.0.1 / 8 ").unwrap(), ("10.0.0.1", "8"));
        assert_eq!(split_cidr("a/b/24").unwrap(), ("a/b", "24"));
        assert_eq!(split_cidr("   "), Err(SubnetError::InvalidInput));
        assert_eq!(split_cidr("10.0.0.1"), Err(SubnetError::InvalidCidr));
        assert_eq!(split_cidr("10.0.0.1/"), Err(SubnetError::InvalidCidr));
        assert_eq!(split_cidr("/24"), Err(SubnetError::InvalidCidr));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("0").unwrap(), 0);
        assert_eq!(parse_prefix("024").unwrap(), 24);
        assert_eq!(parse_prefix("128").unwrap(), 128);
        for bad in ["-1", "+1", "1a", "2.5", "99999999999"] {
            assert_eq!(parse_prefix(bad), Err(SubnetError::InvalidPrefix), "{bad:?}");
        }
    }
}
