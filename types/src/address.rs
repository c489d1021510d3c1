//! Account address type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account address.
///
/// Derived from a public key as the first 20 bytes of its SHA-256 digest
/// (see [`PublicKey::address`](crate::PublicKey::address)). The all-zero value
/// is the "empty" address and never belongs to a real key holder.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Whether this is the zero (unset) address.
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Parse an address from its lowercase or uppercase hex form.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let arr: [u8; ADDRESS_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            TypesError::InvalidLength {
                what: "address",
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            }
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Address::default().is_empty());
        assert_eq!(Address::default(), Address::ZERO);
    }

    #[test]
    fn nonzero_is_not_empty() {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[19] = 1;
        assert!(!Address::new(bytes).is_empty());
    }

    #[test]
    fn hex_display_and_parse() {
        let addr = Address::new([0xab; ADDRESS_LENGTH]);
        let s = addr.to_string();
        assert_eq!(s.len(), 40);
        assert_eq!(s.parse::<Address>().unwrap(), addr);
        assert_eq!(s.to_uppercase().parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Address::from_hex("abcd").unwrap_err();
        assert!(matches!(
            err,
            TypesError::InvalidLength {
                expected: ADDRESS_LENGTH,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn non_hex_rejected() {
        assert!(matches!(
            Address::from_hex("zz").unwrap_err(),
            TypesError::InvalidHex(_)
        ));
    }

    #[test]
    fn serializes_as_hex_string() {
        let addr = Address::new([1u8; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(ADDRESS_LENGTH)));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
