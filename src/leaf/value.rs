use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::address::{Address, ADDRESS_WIDTH};
use super::encoding::{LeafType, WORD_WIDTH};
use super::EncodingError;

/// One typed field of a leaf.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafField {
    Address(Address),
    Bytes32([u8; WORD_WIDTH]),
}

impl LeafField {
    pub fn leaf_type(&self) -> LeafType {
        match self {
            LeafField::Address(_) => LeafType::Address,
            LeafField::Bytes32(_) => LeafType::Bytes32,
        }
    }

    /// Parses `text` as the given field type.
    pub fn parse_as(text: &str, leaf_type: LeafType) -> Result<Self, EncodingError> {
        match leaf_type {
            LeafType::Address => text.parse().map(LeafField::Address),
            LeafType::Bytes32 => {
                let digits = text.strip_prefix("0x").unwrap_or(text);
                let raw =
                    hex::decode(digits).map_err(|_| EncodingError::InvalidHex(text.to_owned()))?;
                let bytes: [u8; WORD_WIDTH] =
                    raw.as_slice()
                        .try_into()
                        .map_err(|_| EncodingError::InvalidLength {
                            expected: WORD_WIDTH,
                            got: raw.len(),
                        })?;
                Ok(LeafField::Bytes32(bytes))
            }
        }
    }

    /// Parses a field whose type is implied by its width (20 or 32 bytes).
    pub fn parse_untyped(text: &str) -> Result<Self, EncodingError> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        match digits.len() {
            len if len == 2 * ADDRESS_WIDTH => Self::parse_as(text, LeafType::Address),
            len if len == 2 * WORD_WIDTH => Self::parse_as(text, LeafType::Bytes32),
            len => Err(EncodingError::InvalidLength {
                expected: ADDRESS_WIDTH,
                got: len / 2,
            }),
        }
    }

    pub fn to_hex(&self) -> String {
        match self {
            LeafField::Address(address) => address.to_hex(),
            LeafField::Bytes32(bytes) => format!("0x{}", hex::encode(bytes)),
        }
    }
}

impl From<Address> for LeafField {
    fn from(address: Address) -> Self {
        LeafField::Address(address)
    }
}

impl fmt::Display for LeafField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for LeafField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.leaf_type(), self.to_hex())
    }
}

impl Serialize for LeafField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for LeafField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        LeafField::parse_untyped(&text).map_err(serde::de::Error::custom)
    }
}

/// Ordered tuple of typed fields committed by one leaf slot.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafValue(Vec<LeafField>);

impl LeafValue {
    pub fn new(fields: Vec<LeafField>) -> Self {
        Self(fields)
    }

    /// Identifier pair in the given field order.
    pub fn pair(first: Address, second: Address) -> Self {
        Self(vec![LeafField::Address(first), LeafField::Address(second)])
    }

    /// Identifier pair with the lower address first.
    ///
    /// Producers use this to normalize unordered pairs before building a tree;
    /// the engine itself never reorders fields.
    pub fn sorted_pair(a: Address, b: Address) -> Self {
        if a <= b {
            Self::pair(a, b)
        } else {
            Self::pair(b, a)
        }
    }

    pub fn fields(&self) -> &[LeafField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text form of every field, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(LeafField::to_hex).collect()
    }
}

impl From<(Address, Address)> for LeafValue {
    fn from((first, second): (Address, Address)) -> Self {
        Self::pair(first, second)
    }
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
