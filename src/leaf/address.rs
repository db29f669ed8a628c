use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::EncodingError;

/// Width of a normalized identifier in bytes.
pub const ADDRESS_WIDTH: usize = 20;

/// 20-byte identifier (token or account address).
///
/// Parsing accepts mixed case and an optional `0x` prefix; the canonical text
/// form is always `0x` plus 40 lowercase hex digits. Equality and ordering are
/// by raw bytes, so two differently cased spellings compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_WIDTH]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_WIDTH]);

    pub const fn from_bytes(bytes: [u8; ADDRESS_WIDTH]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_WIDTH] {
        &self.0
    }

    /// Canonical lowercase text form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|_| EncodingError::InvalidHex(s.to_owned()))?;
        let bytes: [u8; ADDRESS_WIDTH] =
            raw.as_slice()
                .try_into()
                .map_err(|_| EncodingError::InvalidLength {
                    expected: ADDRESS_WIDTH,
                    got: raw.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_WIDTH]> for Address {
    fn from(bytes: [u8; ADDRESS_WIDTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
