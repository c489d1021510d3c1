//! Unjail message: release a jailed application.

use serde::{Deserialize, Serialize};
use stakenet_codec::{CodecError, Encoder};
use stakenet_types::Address;

use crate::error::AppsError;
use crate::msg::{canonical_sign_bytes, log_rejection, Msg};
use crate::{DEFAULT_CODESPACE, ROUTER_KEY};

/// Type tag of [`UnjailMsg`].
pub const UNJAIL_MSG_TYPE: &str = "app_unjail";

/// Request to lift the jailed status of an application.
///
/// Whether the jail period has elapsed is decided by the handler, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnjailMsg {
    #[serde(rename = "address")]
    pub app_addr: Address,
}

impl Msg for UnjailMsg {
    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn msg_type(&self) -> &'static str {
        UNJAIL_MSG_TYPE
    }

    fn signer(&self) -> Address {
        self.app_addr
    }

    fn sign_bytes<E: Encoder>(&self, encoder: &E) -> Result<Vec<u8>, CodecError> {
        canonical_sign_bytes(self, encoder)
    }

    // Reports BadApplicationAddress, not NilApplicationAddress.
    fn validate_basic(&self) -> Result<(), AppsError> {
        if self.app_addr.is_empty() {
            let err = AppsError::bad_application_address(DEFAULT_CODESPACE);
            log_rejection(UNJAIL_MSG_TYPE, &err);
            return Err(err);
        }
        Ok(())
    }
}
