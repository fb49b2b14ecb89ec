use std::fmt;
use std::str::FromStr;

use crate::error::{MatcherError, Result};

/// Length of an EUI-48 hardware address in bytes
pub const MAC_LEN: usize = 6;

/// EUI-48 hardware address
///
/// Textual case is normalized away at parse time, so two literals that differ
/// only in case produce equal values and equal hash keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MacAddr([u8; MAC_LEN]);

impl MacAddr {
    /// Create a MAC address from raw bytes
    pub const fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }

    /// Convert a byte slice to an address, failing closed on any other length
    pub fn from_slice(b: &[u8]) -> Option<Self> {
        <[u8; MAC_LEN]>::try_from(b).ok().map(Self)
    }
}

impl From<[u8; MAC_LEN]> for MacAddr {
    fn from(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for MacAddr {
    type Error = MatcherError;

    fn try_from(b: &[u8]) -> Result<Self> {
        Self::from_slice(b).ok_or_else(|| {
            MatcherError::InvalidFormat(format!(
                "MAC address must be {} bytes, got {}",
                MAC_LEN,
                b.len()
            ))
        })
    }
}

impl AsRef<[u8]> for MacAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for MacAddr {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_mac(s)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}
