//! Network identifiers: the chains an application is staked to use.

use thiserror::Error;

/// Maximum decoded length of a network identifier, in bytes.
pub const NETWORK_IDENTIFIER_LENGTH: usize = 2;

/// A hex token naming a relay chain, e.g. `"0001"`.
pub type NetworkIdentifier = String;

/// Why a network identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkIdentifierError {
    #[error("net id is not valid hex: {0}")]
    InvalidHex(String),

    #[error("net id is empty")]
    Empty,

    #[error("net id length is > {max}")]
    TooLong { max: usize },
}

/// Check that `id` hex-decodes to between 1 and [`NETWORK_IDENTIFIER_LENGTH`] bytes.
pub fn verify_network_identifier(id: &str) -> Result<(), NetworkIdentifierError> {
    let decoded = hex::decode(id).map_err(|e| NetworkIdentifierError::InvalidHex(e.to_string()))?;
    if decoded.is_empty() {
        return Err(NetworkIdentifierError::Empty);
    }
    if decoded.len() > NETWORK_IDENTIFIER_LENGTH {
        return Err(NetworkIdentifierError::TooLong {
            max: NETWORK_IDENTIFIER_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_byte_ids() {
        assert!(verify_network_identifier("0001").is_ok());
        assert!(verify_network_identifier("ffff").is_ok());
        assert!(verify_network_identifier("AB").is_ok());
    }

    #[test]
    fn rejects_three_byte_id() {
        let err = verify_network_identifier("aaaaaa").unwrap_err();
        assert_eq!(err, NetworkIdentifierError::TooLong { max: 2 });
        assert_eq!(err.to_string(), "net id length is > 2");
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(
            verify_network_identifier("").unwrap_err(),
            NetworkIdentifierError::Empty
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(
            verify_network_identifier("zz").unwrap_err(),
            NetworkIdentifierError::InvalidHex(_)
        ));
        // odd length
        assert!(matches!(
            verify_network_identifier("001").unwrap_err(),
            NetworkIdentifierError::InvalidHex(_)
        ));
    }
}
