//! The message contract shared by every application message.

use serde::Serialize;
use stakenet_codec::{sort_json, CodecError, Encoder};
use stakenet_types::Address;

use crate::error::AppsError;
use crate::stake::StakeMsg;
use crate::unjail::UnjailMsg;
use crate::unstake::BeginUnstakeMsg;

/// Behaviour every application message provides to the router and signer.
///
/// All methods are pure: no ledger access, no shared state.
pub trait Msg {
    /// Module route the dispatcher selects a handler by.
    fn route(&self) -> &'static str;

    /// Stable per-variant type tag.
    fn msg_type(&self) -> &'static str;

    /// The single address whose signature authorises this message.
    fn signer(&self) -> Address;

    /// Canonical bytes to sign: the encoded message with sorted object keys.
    fn sign_bytes<E: Encoder>(&self, encoder: &E) -> Result<Vec<u8>, CodecError>;

    /// Stateless structural validation.
    fn validate_basic(&self) -> Result<(), AppsError>;
}

pub(crate) fn canonical_sign_bytes<T, E>(msg: &T, encoder: &E) -> Result<Vec<u8>, CodecError>
where
    T: Serialize + 'static,
    E: Encoder,
{
    sort_json(&encoder.marshal_json(msg)?)
}

pub(crate) fn log_rejection(msg_type: &'static str, err: &AppsError) {
    tracing::debug!(
        msg_type,
        codespace = err.codespace,
        code = err.code(),
        error = %err.kind,
        "message failed basic validation"
    );
}

/// Any application message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMsg {
    Stake(StakeMsg),
    BeginUnstake(BeginUnstakeMsg),
    Unjail(UnjailMsg),
}

impl Msg for AppMsg {
    fn route(&self) -> &'static str {
        match self {
            Self::Stake(msg) => msg.route(),
            Self::BeginUnstake(msg) => msg.route(),
            Self::Unjail(msg) => msg.route(),
        }
    }

    fn msg_type(&self) -> &'static str {
        match self {
            Self::Stake(msg) => msg.msg_type(),
            Self::BeginUnstake(msg) => msg.msg_type(),
            Self::Unjail(msg) => msg.msg_type(),
        }
    }

    fn signer(&self) -> Address {
        match self {
            Self::Stake(msg) => msg.signer(),
            Self::BeginUnstake(msg) => msg.signer(),
            Self::Unjail(msg) => msg.signer(),
        }
    }

    fn sign_bytes<E: Encoder>(&self, encoder: &E) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Stake(msg) => msg.sign_bytes(encoder),
            Self::BeginUnstake(msg) => msg.sign_bytes(encoder),
            Self::Unjail(msg) => msg.sign_bytes(encoder),
        }
    }

    fn validate_basic(&self) -> Result<(), AppsError> {
        match self {
            Self::Stake(msg) => msg.validate_basic(),
            Self::BeginUnstake(msg) => msg.validate_basic(),
            Self::Unjail(msg) => msg.validate_basic(),
        }
    }
}

impl From<StakeMsg> for AppMsg {
    fn from(msg: StakeMsg) -> Self {
        Self::Stake(msg)
    }
}

impl From<BeginUnstakeMsg> for AppMsg {
    fn from(msg: BeginUnstakeMsg) -> Self {
        Self::BeginUnstake(msg)
    }
}

impl From<UnjailMsg> for AppMsg {
    fn from(msg: UnjailMsg) -> Self {
        Self::Unjail(msg)
    }
}
