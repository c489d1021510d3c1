//! Validation errors for application messages.
//!
//! Every error pairs a codespace with a kind. The `(codespace, code)` pair is
//! stable and is what external tooling matches on.

use stakenet_types::NetworkIdentifierError;
use thiserror::Error;

/// Why a message failed stateless validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppsErrorKind {
    #[error("application does not exist for that address")]
    BadApplicationAddress,

    #[error("application address is nil")]
    NilApplicationAddress,

    #[error("the stake amount is invalid")]
    BadStakeAmount,

    #[error("application must stake for at least one chain")]
    NoChains,

    #[error("the network identifier is not valid for {role}: {cause}")]
    InvalidNetworkIdentifier {
        role: &'static str,
        cause: NetworkIdentifierError,
    },
}

impl AppsErrorKind {
    pub fn code(&self) -> u32 {
        match self {
            Self::BadApplicationAddress => 101,
            Self::NilApplicationAddress => 103,
            Self::BadStakeAmount => 115,
            Self::NoChains => 116,
            Self::InvalidNetworkIdentifier { .. } => 117,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("codespace: {codespace}, code: {}, {kind}", .kind.code())]
pub struct AppsError {
    pub codespace: &'static str,
    pub kind: AppsErrorKind,
}

impl AppsError {
    pub fn new(codespace: &'static str, kind: AppsErrorKind) -> Self {
        Self { codespace, kind }
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    pub fn bad_application_address(codespace: &'static str) -> Self {
        Self::new(codespace, AppsErrorKind::BadApplicationAddress)
    }

    pub fn nil_application_address(codespace: &'static str) -> Self {
        Self::new(codespace, AppsErrorKind::NilApplicationAddress)
    }

    pub fn bad_stake_amount(codespace: &'static str) -> Self {
        Self::new(codespace, AppsErrorKind::BadStakeAmount)
    }

    pub fn no_chains(codespace: &'static str) -> Self {
        Self::new(codespace, AppsErrorKind::NoChains)
    }

    pub fn invalid_network_identifier(
        codespace: &'static str,
        role: &'static str,
        cause: NetworkIdentifierError,
    ) -> Self {
        Self::new(
            codespace,
            AppsErrorKind::InvalidNetworkIdentifier { role, cause },
        )
    }
}
