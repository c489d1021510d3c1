//! Concrete-type registry and envelope encoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet};

use crate::CodecError;

/// Maximum accepted JSON document size in bytes.
pub const MAX_JSON_SIZE: usize = 1024 * 1024; // 1 MiB

/// Encoding capability handed to message types.
///
/// Implemented by [`Codec`]; tests substitute stubs.
pub trait Encoder {
    fn marshal_json<T: Serialize + 'static>(&self, value: &T) -> Result<Vec<u8>, CodecError>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    #[serde(rename = "type")]
    type_name: &'a str,
    value: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "type")]
    type_name: String,
    value: T,
}

/// A registry of concrete message types and their stable names.
///
/// Build it once at startup, register every type, then [`seal`](Codec::seal)
/// it. A sealed codec is immutable and can be shared across threads freely.
#[derive(Debug, Default)]
pub struct Codec {
    concrete: HashMap<TypeId, &'static str>,
    names: HashSet<&'static str>,
    sealed: bool,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under `name`. Names and types must each be unique.
    pub fn register_concrete<T: 'static>(&mut self, name: &'static str) -> Result<(), CodecError> {
        if self.sealed {
            return Err(CodecError::Sealed(name));
        }
        if let Some(registered) = self.concrete_name::<T>() {
            return Err(CodecError::DuplicateType {
                type_name: type_name::<T>(),
                registered,
            });
        }
        if self.names.contains(name) {
            return Err(CodecError::DuplicateName(name));
        }
        self.concrete.insert(TypeId::of::<T>(), name);
        self.names.insert(name);
        Ok(())
    }

    /// Freeze the registry. Further registrations fail.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// The registered name of `T`, if any.
    pub fn concrete_name<T: 'static>(&self) -> Option<&'static str> {
        self.concrete.get(&TypeId::of::<T>()).copied()
    }

    /// Decode a JSON document produced by [`Encoder::marshal_json`].
    ///
    /// Registered types must arrive wrapped in an envelope naming exactly their
    /// registered name; unregistered types are decoded bare.
    pub fn unmarshal_json<T: DeserializeOwned + 'static>(
        &self,
        data: &[u8],
    ) -> Result<T, CodecError> {
        if !self.sealed {
            return Err(CodecError::Unsealed);
        }
        if data.len() > MAX_JSON_SIZE {
            return Err(CodecError::MessageTooLarge {
                size: data.len(),
                max: MAX_JSON_SIZE,
            });
        }
        match self.concrete_name::<T>() {
            Some(expected) => {
                let envelope: Envelope<T> = serde_json::from_slice(data)?;
                if envelope.type_name != expected {
                    return Err(CodecError::TypeMismatch {
                        expected,
                        actual: envelope.type_name,
                    });
                }
                Ok(envelope.value)
            }
            None => Ok(serde_json::from_slice(data)?),
        }
    }
}

impl Encoder for Codec {
    fn marshal_json<T: Serialize + 'static>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        if !self.sealed {
            return Err(CodecError::Unsealed);
        }
        let bytes = match self.concrete_name::<T>() {
            Some(name) => serde_json::to_vec(&EnvelopeRef {
                type_name: name,
                value,
            })?,
            None => serde_json::to_vec(value)?,
        };
        Ok(bytes)
    }
}
