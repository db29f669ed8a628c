use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width in bytes of every digest produced by the engine.
pub const HASH_WIDTH: usize = 32;

/// 32-byte Keccak-256 digest used for leaves, internal nodes and roots.
///
/// The text form is `0x` followed by 64 lowercase hexadecimal digits. Ordering
/// is byte-lexicographic, which is the order the node combiner relies on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash {
    bytes: [u8; HASH_WIDTH],
}

impl Hash {
    /// All-zero digest.
    pub const ZERO: Hash = Hash {
        bytes: [0u8; HASH_WIDTH],
    };

    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; HASH_WIDTH]) -> Self {
        Self { bytes }
    }

    /// Constructs a hash from a slice, returning `None` on a width mismatch.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; HASH_WIDTH] = bytes.try_into().ok()?;
        Some(Self { bytes })
    }

    pub const fn as_bytes(&self) -> &[u8; HASH_WIDTH] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; HASH_WIDTH] {
        &mut self.bytes
    }

    pub const fn into_bytes(self) -> [u8; HASH_WIDTH] {
        self.bytes
    }

    /// Lowercase hexadecimal form with the `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

/// Error returned when parsing a [`Hash`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashParseError {
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
    #[error("digest must be {HASH_WIDTH} bytes, got {0}")]
    InvalidLength(usize),
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|_| HashParseError::InvalidHex(s.to_owned()))?;
        Hash::from_slice(&raw).ok_or(HashParseError::InvalidLength(raw.len()))
    }
}

impl From<[u8; HASH_WIDTH]> for Hash {
    fn from(bytes: [u8; HASH_WIDTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; HASH_WIDTH] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip_is_lowercase() {
        let mut bytes = [0u8; HASH_WIDTH];
        bytes[0] = 0xAB;
        bytes[31] = 0x01;
        let hash = Hash::from_bytes(bytes);
        let text = hash.to_hex();
        assert!(text.starts_with("0xab"));
        assert_eq!(text.len(), 2 + 2 * HASH_WIDTH);
        assert_eq!(text.parse::<Hash>().unwrap(), hash);
        assert_eq!(text.to_uppercase().replace("0X", "0x").parse::<Hash>().unwrap(), hash);
    }

    #[test]
    fn rejects_short_digest() {
        let err = "0x1234".parse::<Hash>().unwrap_err();
        assert_eq!(err, HashParseError::InvalidLength(2));
    }

    #[test]
    fn ordering_is_bytewise() {
        let mut low = [0u8; HASH_WIDTH];
        let mut high = [0u8; HASH_WIDTH];
        low[31] = 0xff;
        high[0] = 0x01;
        assert!(Hash::from_bytes(low) < Hash::from_bytes(high));
    }
}
