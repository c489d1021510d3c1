//! Key material for application operators.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::{Address, ADDRESS_LENGTH};
use crate::error::TypesError;

/// Length of a raw Ed25519 public key.
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;

/// A verification key.
///
/// The key scheme is carried by the variant; every scheme can derive an
/// [`Address`] and has a canonical hex rendering of its raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; ED25519_PUBLIC_KEY_LENGTH]),
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(bytes) => bytes,
        }
    }

    /// Whether the key is unset (all bytes zero).
    pub fn is_empty(&self) -> bool {
        self.as_bytes().iter().all(|b| *b == 0)
    }

    /// Derive the account address: the first 20 bytes of SHA-256 over the raw key.
    pub fn address(&self) -> Address {
        let digest = Sha256::digest(self.as_bytes());
        let mut out = [0u8; ADDRESS_LENGTH];
        out.copy_from_slice(&digest[..ADDRESS_LENGTH]);
        Address::new(out)
    }

    /// Parse a key from the hex form of its raw bytes.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let arr: [u8; ED25519_PUBLIC_KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            TypesError::InvalidLength {
                what: "public key",
                expected: ED25519_PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::Ed25519(arr))
    }
}

impl Default for PublicKey {
    fn default() -> Self {
        Self::Ed25519([0u8; ED25519_PUBLIC_KEY_LENGTH])
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519(bytes) => write!(f, "Ed25519({})", hex::encode(bytes)),
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_bytes()))
    }
}

impl FromStr for PublicKey {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.as_bytes()))
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A 32-byte Ed25519 private key (seed).
///
/// Deliberately not `Debug`, `Serialize` or `Clone`. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// A 64-byte Ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// A public/private key pair.
///
/// Build with `stakenet_crypto::keypair_from_seed()`.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_empty() {
        assert!(PublicKey::default().is_empty());
        assert!(!PublicKey::Ed25519([3u8; 32]).is_empty());
    }

    #[test]
    fn address_is_truncated_sha256() {
        let key = PublicKey::Ed25519([7u8; 32]);
        let digest = Sha256::digest([7u8; 32]);
        assert_eq!(key.address().as_bytes()[..], digest[..ADDRESS_LENGTH]);
    }

    #[test]
    fn address_derivation_is_deterministic() {
        let key = PublicKey::Ed25519([9u8; 32]);
        assert_eq!(key.address(), key.address());
        assert_ne!(key.address(), PublicKey::Ed25519([8u8; 32]).address());
    }

    #[test]
    fn hex_roundtrip() {
        let key = PublicKey::Ed25519([0x5a; 32]);
        assert_eq!(key.to_string().parse::<PublicKey>().unwrap(), key);
    }

    #[test]
    fn short_key_rejected() {
        assert!(matches!(
            PublicKey::from_hex("00ff").unwrap_err(),
            TypesError::InvalidLength { actual: 2, .. }
        ));
    }

    #[test]
    fn serializes_as_hex_string() {
        let key = PublicKey::Ed25519([0u8; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", "00".repeat(32)));
    }
}
