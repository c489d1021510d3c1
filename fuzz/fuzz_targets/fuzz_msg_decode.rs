#![no_main]

use libfuzzer_sys::fuzz_target;
use stakenet_apps::{module_codec, BeginUnstakeMsg, Msg, StakeMsg, UnjailMsg};

// Decoding untrusted JSON must never panic, and anything that decodes must
// validate without panicking and re-encode to stable sign bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(codec) = module_codec() else {
        return;
    };

    if let Ok(msg) = codec.unmarshal_json::<StakeMsg>(data) {
        let _ = msg.validate_basic();
        let a = msg.sign_bytes(&codec).expect("decoded stake must re-encode");
        let b = msg.sign_bytes(&codec).expect("decoded stake must re-encode");
        assert_eq!(a, b);
        let back: StakeMsg = codec.unmarshal_json(&a).expect("sign bytes must decode");
        assert_eq!(back, msg);
    }

    if let Ok(msg) = codec.unmarshal_json::<BeginUnstakeMsg>(data) {
        assert_eq!(msg.validate_basic().is_ok(), !msg.address.is_empty());
        let _ = msg.sign_bytes(&codec);
    }

    if let Ok(msg) = codec.unmarshal_json::<UnjailMsg>(data) {
        assert_eq!(msg.validate_basic().is_ok(), !msg.app_addr.is_empty());
        let _ = msg.sign_bytes(&codec);
    }
});
