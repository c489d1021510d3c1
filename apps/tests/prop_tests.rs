use proptest::prelude::*;

use stakenet_apps::{module_codec, AppsErrorKind, BeginUnstakeMsg, Msg, StakeMsg, UnjailMsg};
use stakenet_types::{Address, PublicKey, StakeAmount};

fn nonzero_key() -> impl Strategy<Value = PublicKey> {
    prop::array::uniform32(0u8..)
        .prop_filter("key must be set", |b| b.iter().any(|x| *x != 0))
        .prop_map(PublicKey::Ed25519)
}

fn valid_chain() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 1..=2).prop_map(hex::encode)
}

fn long_chain() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 3..16).prop_map(hex::encode)
}

proptest! {
    /// Set key, positive stake and short chains always validate.
    #[test]
    fn valid_stake_accepted(
        key in nonzero_key(),
        value in 1i64..,
        chains in prop::collection::vec(valid_chain(), 1..8),
    ) {
        let msg = StakeMsg { public_key: key, chains, value: StakeAmount::new(value) };
        prop_assert!(msg.validate_basic().is_ok());
        prop_assert_eq!(msg.signer(), key.address());
    }

    /// An empty key is reported first no matter what else is wrong.
    #[test]
    fn empty_key_always_nil(
        value in any::<i64>(),
        chains in prop::collection::vec(".{0,8}", 0..4),
    ) {
        let msg = StakeMsg { public_key: PublicKey::default(), chains, value: StakeAmount::new(value) };
        prop_assert_eq!(msg.validate_basic().unwrap_err().kind, AppsErrorKind::NilApplicationAddress);
    }

    /// Non-positive stake is rejected before chains are looked at.
    #[test]
    fn non_positive_stake_rejected(
        key in nonzero_key(),
        value in i64::MIN..=0,
        chains in prop::collection::vec(".{0,8}", 0..4),
    ) {
        let msg = StakeMsg { public_key: key, chains, value: StakeAmount::new(value) };
        prop_assert_eq!(msg.validate_basic().unwrap_err().kind, AppsErrorKind::BadStakeAmount);
    }

    /// A single over-long chain anywhere in the list fails the message.
    #[test]
    fn long_chain_rejected(
        key in nonzero_key(),
        chains in prop::collection::vec(valid_chain(), 0..4),
        bad in long_chain(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut chains = chains;
        let pos = at.index(chains.len() + 1);
        chains.insert(pos, bad);
        let msg = StakeMsg { public_key: key, chains, value: StakeAmount::new(10) };
        let is_invalid_network_id = matches!(
            msg.validate_basic().unwrap_err().kind,
            AppsErrorKind::InvalidNetworkIdentifier { .. }
        );
        prop_assert!(is_invalid_network_id);
    }

    /// Address-only messages accept exactly the nonzero addresses and sign as them.
    #[test]
    fn address_messages(bytes in prop::array::uniform20(0u8..)) {
        let address = Address::new(bytes);
        let unstake = BeginUnstakeMsg { address };
        let unjail = UnjailMsg { app_addr: address };
        prop_assert_eq!(unstake.signer(), address);
        prop_assert_eq!(unjail.signer(), address);
        prop_assert_eq!(unstake.validate_basic().is_ok(), !address.is_empty());
        prop_assert_eq!(unjail.validate_basic().is_ok(), !address.is_empty());
    }

    /// Equal messages produce equal sign bytes; distinct stakes produce distinct bytes.
    #[test]
    fn sign_bytes_deterministic(key in nonzero_key(), a in any::<i64>(), b in any::<i64>()) {
        let codec = module_codec().unwrap();
        let msg_a = StakeMsg { public_key: key, chains: vec!["0001".into()], value: StakeAmount::new(a) };
        let msg_a2 = msg_a.clone();
        let msg_b = StakeMsg { value: StakeAmount::new(b), ..msg_a.clone() };
        prop_assert_eq!(msg_a.sign_bytes(&codec).unwrap(), msg_a2.sign_bytes(&codec).unwrap());
        prop_assert_eq!(
            msg_a.sign_bytes(&codec).unwrap() == msg_b.sign_bytes(&codec).unwrap(),
            a == b
        );
    }
}
