//! Stake message: register or update an application.

use serde::{Deserialize, Serialize};
use stakenet_codec::{CodecError, Encoder};
use stakenet_types::{
    verify_network_identifier, Address, NetworkIdentifier, PublicKey, StakeAmount,
};

use crate::error::AppsError;
use crate::msg::{canonical_sign_bytes, log_rejection, Msg};
use crate::{APPLICATION_ROLE, DEFAULT_CODESPACE, ROUTER_KEY};

/// Type tag of [`StakeMsg`].
pub const STAKE_MSG_TYPE: &str = "app_stake";

/// Request to stake an application for a set of chains.
///
/// The signer is the address derived from `public_key`; there is no separate
/// address field to keep in sync.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeMsg {
    #[serde(rename = "pubkey")]
    pub public_key: PublicKey,
    /// Chains the application will use. Order is kept; duplicates are allowed.
    pub chains: Vec<NetworkIdentifier>,
    pub value: StakeAmount,
}

impl StakeMsg {
    // Checks run cheapest first and stop at the first failure.
    fn check(&self) -> Result<(), AppsError> {
        if self.public_key.is_empty() {
            return Err(AppsError::nil_application_address(DEFAULT_CODESPACE));
        }
        if !self.value.is_positive() {
            return Err(AppsError::bad_stake_amount(DEFAULT_CODESPACE));
        }
        if self.chains.is_empty() {
            return Err(AppsError::no_chains(DEFAULT_CODESPACE));
        }
        for chain in &self.chains {
            verify_network_identifier(chain).map_err(|cause| {
                AppsError::invalid_network_identifier(DEFAULT_CODESPACE, APPLICATION_ROLE, cause)
            })?;
        }
        Ok(())
    }
}

impl Msg for StakeMsg {
    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn msg_type(&self) -> &'static str {
        STAKE_MSG_TYPE
    }

    fn signer(&self) -> Address {
        self.public_key.address()
    }

    fn sign_bytes<E: Encoder>(&self, encoder: &E) -> Result<Vec<u8>, CodecError> {
        canonical_sign_bytes(self, encoder)
    }

    fn validate_basic(&self) -> Result<(), AppsError> {
        self.check().inspect_err(|err| log_rejection(STAKE_MSG_TYPE, err))
    }
}
