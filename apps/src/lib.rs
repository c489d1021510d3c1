//! Staking-lifecycle messages for application actors.
//!
//! Message types:
//! - **Stake**: register or update an application with a key, stake and chains
//! - **BeginUnstake**: start the unstaking period for a staked application
//! - **Unjail**: ask for a jailed application to be released
//!
//! Each message implements [`Msg`]: routing metadata for the dispatcher, the
//! single required signer, canonical sign bytes and stateless validation.
//! Nothing here touches ledger state.

pub mod codec;
pub mod error;
pub mod msg;
pub mod stake;
pub mod unjail;
pub mod unstake;

pub use codec::{module_codec, register_codec};
pub use error::{AppsError, AppsErrorKind};
pub use msg::{AppMsg, Msg};
pub use stake::StakeMsg;
pub use unjail::UnjailMsg;
pub use unstake::BeginUnstakeMsg;

/// Name of the application module.
pub const MODULE_NAME: &str = "application";

/// Route every message of this module is dispatched on.
pub const ROUTER_KEY: &str = MODULE_NAME;

/// Codespace for errors raised by this module.
pub const DEFAULT_CODESPACE: &str = MODULE_NAME;

/// Actor role named in errors about the staked actor's own fields.
pub const APPLICATION_ROLE: &str = "application";
