//! Begin-unstake message: start the unstaking period.

use serde::{Deserialize, Serialize};
use stakenet_codec::{CodecError, Encoder};
use stakenet_types::Address;

use crate::error::AppsError;
use crate::msg::{canonical_sign_bytes, log_rejection, Msg};
use crate::{DEFAULT_CODESPACE, ROUTER_KEY};

/// Type tag of [`BeginUnstakeMsg`].
pub const BEGIN_UNSTAKE_MSG_TYPE: &str = "app_begin_unstaking";

/// Request that a staked application begin unstaking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginUnstakeMsg {
    #[serde(rename = "application_address")]
    pub address: Address,
}

impl Msg for BeginUnstakeMsg {
    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn msg_type(&self) -> &'static str {
        BEGIN_UNSTAKE_MSG_TYPE
    }

    fn signer(&self) -> Address {
        self.address
    }

    fn sign_bytes<E: Encoder>(&self, encoder: &E) -> Result<Vec<u8>, CodecError> {
        canonical_sign_bytes(self, encoder)
    }

    fn validate_basic(&self) -> Result<(), AppsError> {
        if self.address.is_empty() {
            let err = AppsError::nil_application_address(DEFAULT_CODESPACE);
            log_rejection(BEGIN_UNSTAKE_MSG_TYPE, &err);
            return Err(err);
        }
        Ok(())
    }
}
