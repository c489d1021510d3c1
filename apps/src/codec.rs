//! Registration of this module's messages with the canonical codec.

use stakenet_codec::{Codec, CodecError};

use crate::{BeginUnstakeMsg, StakeMsg, UnjailMsg};

/// Register every application message under its stable concrete name.
pub fn register_codec(codec: &mut Codec) -> Result<(), CodecError> {
    codec.register_concrete::<StakeMsg>("apps/MsgAppStake")?;
    codec.register_concrete::<BeginUnstakeMsg>("apps/MsgBeginAppUnstake")?;
    codec.register_concrete::<UnjailMsg>("apps/MsgAppUnjail")?;
    Ok(())
}

/// Build the sealed module codec.
///
/// Call once at startup and share the result; the sealed codec is read-only.
pub fn module_codec() -> Result<Codec, CodecError> {
    let mut codec = Codec::new();
    register_codec(&mut codec)?;
    codec.seal();
    tracing::debug!("application module codec sealed");
    Ok(codec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_codec_is_sealed() {
        let codec = module_codec().unwrap();
        assert!(codec.is_sealed());
        assert_eq!(codec.concrete_name::<StakeMsg>(), Some("apps/MsgAppStake"));
        assert_eq!(
            codec.concrete_name::<BeginUnstakeMsg>(),
            Some("apps/MsgBeginAppUnstake")
        );
        assert_eq!(codec.concrete_name::<UnjailMsg>(), Some("apps/MsgAppUnjail"));
    }

    #[test]
    fn registering_twice_fails() {
        let mut codec = Codec::new();
        register_codec(&mut codec).unwrap();
        assert!(matches!(
            register_codec(&mut codec).unwrap_err(),
            CodecError::DuplicateType { .. }
        ));
    }
}
