use core::fmt;

use super::constants::{CURVE_ORDER, PRIVATE_KEY_LEN};
use crate::error::Error;

/// A secp256k1 private scalar, known to satisfy `0 < d < n`.
///
/// The only way to build one is through [`PrivateKey::from_hex`] or
/// [`PrivateKey::from_bytes`], so every instance has passed range validation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    data: [u8; PRIVATE_KEY_LEN],
}

impl PrivateKey {
    /// Parse a hex private key. Surrounding whitespace is ignored and either
    /// letter case is accepted.
    pub fn from_hex(hex_string: &str) -> Result<Self, Error> {
        let bytes = hex::decode(hex_string.trim())?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() != PRIVATE_KEY_LEN {
            return Err(Error::MalformedInput(format!(
                "expected {} bytes ({} hex chars), got {} bytes",
                PRIVATE_KEY_LEN,
                PRIVATE_KEY_LEN * 2,
                data.len()
            )));
        }

        let mut key_data = [0u8; PRIVATE_KEY_LEN];
        key_data.copy_from_slice(data);

        if Self::is_zero(&key_data) || Self::is_ge_curve_order(&key_data) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { data: key_data })
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.data
    }

    fn is_zero(data: &[u8; PRIVATE_KEY_LEN]) -> bool {
        data.iter().all(|&b| b == 0)
    }

    fn is_ge_curve_order(data: &[u8; PRIVATE_KEY_LEN]) -> bool {
        // Big-endian, so lexicographic order is numeric order.
        data >= &CURVE_ORDER
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
