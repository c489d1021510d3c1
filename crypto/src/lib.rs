//! Ed25519 signing capability for application operators.
//!
//! Message crates never call into this directly; it signs and checks the
//! bytes they produce.

pub mod keys;
pub mod sign;

pub use keys::keypair_from_seed;
pub use sign::{sign_message, verify_signature};
