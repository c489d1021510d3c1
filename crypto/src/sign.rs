//! Ed25519 message signing and verification.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use stakenet_types::{PrivateKey, PublicKey, Signature};

/// Sign a message with a private key, returning the signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `false` for malformed keys as well as bad signatures.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    match public_key {
        PublicKey::Ed25519(bytes) => {
            let Ok(verifying_key) = VerifyingKey::from_bytes(bytes) else {
                return false;
            };
            let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
            verifying_key.verify_strict(message, &dalek_sig).is_ok()
        }
    }
}
