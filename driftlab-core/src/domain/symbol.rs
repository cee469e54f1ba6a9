//! Symbol — a short, fixed-capacity instrument ticker.
//!
//! Symbols are truncated to at most 7 characters on construction and stored
//! inline, so copying one into a trade record never touches the heap.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum stored length of a symbol, in bytes.
pub const SYMBOL_MAX_LEN: usize = 7;

/// A tradable instrument's ticker, stored inline.
///
/// Construction truncates to whatever fits in [`SYMBOL_MAX_LEN`] bytes,
/// stopping at a character boundary. Equality and hashing follow the
/// truncated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Symbol {
    bytes: [u8; SYMBOL_MAX_LEN],
    len: u8,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        let mut bytes = [0u8; SYMBOL_MAX_LEN];
        let mut len = 0;
        for ch in name.chars() {
            let mut buf = [0u8; 4];
            let encoded = ch.encode_utf8(&mut buf).as_bytes();
            if len + encoded.len() > SYMBOL_MAX_LEN {
                break;
            }
            bytes[len..len + encoded.len()].copy_from_slice(encoded);
            len += encoded.len();
        }
        Self {
            bytes,
            len: len as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        // The buffer is filled from whole encode_utf8 outputs, so this slice
        // is always valid UTF-8.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct SymbolVisitor;

impl Visitor<'_> for SymbolVisitor {
    type Value = Symbol;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a symbol string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Symbol, E> {
        Ok(Symbol::new(v))
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SymbolVisitor)
    }
}
