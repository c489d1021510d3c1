#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stakenet_apps::{AppsErrorKind, Msg, StakeMsg};
use stakenet_types::{PublicKey, StakeAmount};

#[derive(Debug, Arbitrary)]
struct Input {
    key: [u8; 32],
    value: i64,
    chains: Vec<String>,
}

// Validation is total and reports failures in a fixed order.
fuzz_target!(|input: Input| {
    let msg = StakeMsg {
        public_key: PublicKey::Ed25519(input.key),
        chains: input.chains,
        value: StakeAmount::new(input.value),
    };
    let result = msg.validate_basic();
    assert_eq!(result, msg.validate_basic());

    match result {
        Ok(()) => {
            assert!(!msg.public_key.is_empty());
            assert!(input.value > 0);
            assert!(!msg.chains.is_empty());
        }
        Err(err) => match err.kind {
            AppsErrorKind::NilApplicationAddress => assert!(msg.public_key.is_empty()),
            AppsErrorKind::BadStakeAmount => assert!(input.value <= 0),
            AppsErrorKind::NoChains => assert!(msg.chains.is_empty()),
            AppsErrorKind::InvalidNetworkIdentifier { .. } => {}
            AppsErrorKind::BadApplicationAddress => panic!("stake never reports a bad address"),
        },
    }
});
