//! Address checksum primitive
//!
//! Bonder addresses are checked through [`AddressChecksum`] so callers can
//! substitute their own implementation. [`Eip55Checksum`] is the default.

use regex::Regex;
use sha3::{Digest, Keccak256};

/// Canonicalizes an address or reports why it is invalid
pub trait AddressChecksum {
    fn checksum(&self, address: &str) -> Result<String, String>;
}

/// EIP-55 mixed-case checksum over keccak-256.
///
/// All-lowercase and all-uppercase addresses carry no checksum and are
/// accepted; mixed-case input must match the checksum exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip55Checksum;

impl Eip55Checksum {
    const ADDRESS_PATTERN: &'static str = r"^0x[0-9a-fA-F]{40}$";

    fn encode(hex_digits: &str) -> String {
        let lower = hex_digits.to_ascii_lowercase();
        let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

        lower
            .chars()
            .zip(hash.chars())
            .map(|(c, h)| {
                let nibble = h.to_digit(16).unwrap_or(0);
                if c.is_ascii_alphabetic() && nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }
}

impl AddressChecksum for Eip55Checksum {
    fn checksum(&self, address: &str) -> Result<String, String> {
        let pattern = Regex::new(Self::ADDRESS_PATTERN)
            .map_err(|e| format!("invalid address pattern: {}", e))?;
        if !pattern.is_match(address) {
            return Err("expected 0x followed by 40 hex digits".to_string());
        }

        let digits = &address[2..];
        let checksummed = Self::encode(digits);

        let is_lower = digits == digits.to_ascii_lowercase();
        let is_upper = digits == digits.to_ascii_uppercase();
        if !is_lower && !is_upper && digits != checksummed {
            return Err("bad address checksum".to_string());
        }

        Ok(format!("0x{}", checksummed))
    }
}
