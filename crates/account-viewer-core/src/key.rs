//! Stellar account id (StrKey `G...`) parsing and display helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of an encoded account id.
pub const PUBLIC_KEY_LEN: usize = 56;

/// Version byte for ed25519 public keys (`G` prefix).
const ACCOUNT_ID_VERSION: u8 = 6 << 3;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicKeyError {
    #[error("public key is empty")]
    Empty,
    #[error("public key must start with 'G'")]
    WrongPrefix,
    #[error("public key must be 56 characters, got {0}")]
    WrongLength(usize),
    #[error("invalid base32 character {0:?}")]
    InvalidCharacter(char),
    #[error("unexpected version byte {0:#04x}")]
    VersionByte(u8),
    #[error("checksum mismatch")]
    Checksum,
}

/// A validated Stellar account id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey {
    encoded: String,
    raw: [u8; 32],
}

impl PublicKey {
    pub fn parse(input: &str) -> Result<Self, PublicKeyError> {
        let encoded = input.trim();
        if encoded.is_empty() {
            return Err(PublicKeyError::Empty);
        }
        if !encoded.starts_with('G') {
            return Err(PublicKeyError::WrongPrefix);
        }
        if encoded.len() != PUBLIC_KEY_LEN {
            return Err(PublicKeyError::WrongLength(encoded.chars().count()));
        }

        let decoded = base32_decode(encoded)?;
        // 1 version byte + 32 key bytes + 2 checksum bytes
        let (body, checksum) = decoded.split_at(33);
        if body[0] != ACCOUNT_ID_VERSION {
            return Err(PublicKeyError::VersionByte(body[0]));
        }
        let expected = crc16_xmodem(body);
        if checksum != expected.to_le_bytes() {
            return Err(PublicKeyError::Checksum);
        }

        let mut raw = [0u8; 32];
        raw.copy_from_slice(&body[1..]);
        Ok(Self {
            encoded: encoded.to_owned(),
            raw,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn raw_bytes(&self) -> &[u8; 32] {
        &self.raw
    }

    /// Abbreviated form used in compact layouts.
    pub fn short(&self) -> String {
        format_public_key(Some(&self.encoded))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl FromStr for PublicKey {
    type Err = PublicKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = PublicKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.encoded
    }
}

/// Truncate a public key to `ABCD…WXYZ` for display.
///
/// Missing or empty input yields an empty string. Keys too short to
/// abbreviate are returned unchanged.
pub fn format_public_key(public_key: Option<&str>) -> String {
    let Some(key) = public_key.map(str::trim).filter(|k| !k.is_empty()) else {
        return String::new();
    };
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return key.to_owned();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

fn base32_decode(input: &str) -> Result<Vec<u8>, PublicKeyError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for ch in input.chars() {
        let value = BASE32_ALPHABET
            .iter()
            .position(|&c| c as char == ch)
            .ok_or(PublicKeyError::InvalidCharacter(ch))? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Ok(out)
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
