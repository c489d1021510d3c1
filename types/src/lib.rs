//! Primitive types for the application staking module.
//!
//! Addresses, public keys, stake amounts and network identifiers shared by
//! every other crate in the workspace.

pub mod address;
pub mod amount;
pub mod error;
pub mod keys;
pub mod network;

pub use address::{Address, ADDRESS_LENGTH};
pub use amount::StakeAmount;
pub use error::TypesError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::{
    verify_network_identifier, NetworkIdentifier, NetworkIdentifierError,
    NETWORK_IDENTIFIER_LENGTH,
};
