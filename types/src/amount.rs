//! Stake amount type.
//!
//! Stake is an arbitrary-precision signed integer. Negative values are
//! representable; message validation is what rejects non-positive stake.

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// An amount of stake, in the smallest unit.
///
/// Serialized as a quoted decimal string so that values beyond 64 bits survive
/// JSON encoders that coerce numbers to floating point.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StakeAmount(BigInt);

impl StakeAmount {
    pub fn new(value: i64) -> Self {
        Self(BigInt::from(value))
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }
}

impl From<i64> for StakeAmount {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<BigInt> for StakeAmount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl FromStr for StakeAmount {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BigInt>()
            .map(Self)
            .map_err(|e| TypesError::InvalidAmount(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for StakeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StakeAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for StakeAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
