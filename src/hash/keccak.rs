use sha3::{Digest, Keccak256};

use super::digest::Hash;

/// Streaming Keccak-256 helper mirroring the `new` / `update` / `finalize`
/// shape used across the engine.
///
/// This is the original Keccak padding (as used by Ethereum), not the
/// NIST SHA3-256 variant.
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Keccak256,
}

impl Hasher {
    pub fn new() -> Self {
        Self {
            inner: Keccak256::new(),
        }
    }

    /// Absorbs additional bytes into the hasher state.
    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        self.inner.update(bytes);
        self
    }

    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.inner.finalize().into())
    }
}

/// One-shot Keccak-256 over `data`.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_matches_reference() {
        assert_eq!(
            keccak256(b"").to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = Hasher::new();
        hasher.update(b"pair-").update(b"merkle");
        assert_eq!(hasher.finalize(), keccak256(b"pair-merkle"));
    }
}
