//! Keyed content digests giving every tile a stable identity
//!
//! The full 256-bit digest is kept for collision checks; only the first
//! [`TILE_ID_HEX_LEN`] hex characters are shown to players.

use crate::io::configuration::{KEY_DERIVATION_CONTEXT, TILE_ID_HEX_LEN};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Tile;
use std::fmt;
use std::str::FromStr;

const ID_BYTES: usize = TILE_ID_HEX_LEN / 2;

/// Truncated tile digest; ordering matches the ordering of its hex text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId([u8; ID_BYTES]);

impl TileId {
    /// Wrap raw id bytes
    pub const fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw id bytes
    pub const fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for TileId {
    type Err = crate::io::error::ProcessingError;

    fn from_str(text: &str) -> Result<Self> {
        let reject = |reason: &str| invalid_parameter("tile id", &text, &reason);
        if text.len() != TILE_ID_HEX_LEN || !text.is_ascii() {
            return Err(reject("expected 8 hex characters"));
        }
        let mut bytes = [0; ID_BYTES];
        for (slot, pair) in bytes.iter_mut().zip(text.as_bytes().chunks(2)) {
            let digits = std::str::from_utf8(pair).map_err(|_utf8_error| reject("not ascii"))?;
            *slot = u8::from_str_radix(digits, 16).map_err(|_parse_error| reject("not hex"))?;
        }
        Ok(Self(bytes))
    }
}

/// Full keyed digest of a tile's canonical content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileDigest {
    hash: blake3::Hash,
    id_bytes: usize,
}

impl TileDigest {
    /// Display id: the digest truncated to its leading bytes
    pub fn id(&self) -> TileId {
        let mut bytes = [0; ID_BYTES];
        for (slot, byte) in bytes
            .iter_mut()
            .zip(self.hash.as_bytes())
            .take(self.id_bytes)
        {
            *slot = *byte;
        }
        TileId(bytes)
    }

    /// Full digest as hex
    pub fn to_hex(&self) -> String {
        self.hash.to_hex().to_string()
    }
}

/// Computes keyed digests over canonical tile content
#[derive(Debug, Clone)]
pub struct TileHasher {
    key: [u8; blake3::KEY_LEN],
    id_bytes: usize,
}

impl TileHasher {
    /// Create a hasher keyed by a shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_DERIVATION_CONTEXT, secret.as_bytes()),
            id_bytes: ID_BYTES,
        }
    }

    /// Create a hasher whose ids keep only the leading `id_bytes` digest bytes
    ///
    /// Trailing id bytes read as zero, so ids stay eight hex characters wide.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `id_bytes` is between 1 and 4
    pub fn with_id_bytes(secret: &str, id_bytes: usize) -> Result<Self> {
        if !(1..=ID_BYTES).contains(&id_bytes) {
            return Err(invalid_parameter(
                "id_bytes",
                &id_bytes,
                &format!("must be between 1 and {ID_BYTES}"),
            ));
        }
        Ok(Self {
            id_bytes,
            ..Self::new(secret)
        })
    }

    /// Number of leading digest bytes kept in each id
    pub const fn id_bytes(&self) -> usize {
        self.id_bytes
    }

    /// Full digest of a tile
    pub fn digest(&self, tile: &Tile) -> TileDigest {
        TileDigest {
            hash: blake3::keyed_hash(&self.key, tile.canonical().as_bytes()),
            id_bytes: self.id_bytes,
        }
    }

    /// Display id of a tile
    pub fn hash(&self, tile: &Tile) -> TileId {
        self.digest(tile).id()
    }
}
