pub mod constants;
pub mod secret_key;

use k256::SecretKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::error::Error;
use constants::COMPRESSED_PUBLIC_KEY_LEN;
pub use secret_key::PrivateKey;

pub fn secp256k1_derive_public_key(private_key: &PrivateKey) -> Result<[u8; COMPRESSED_PUBLIC_KEY_LEN], Error> {
    // k256 re-checks the range and rejects zero / >= n
    let secret_key = SecretKey::from_bytes(private_key.as_bytes().into())?;

    // Q = d * G
    let public_key = secret_key.public_key();

    // Compressed SEC1: 0x02/0x03 parity prefix + 32-byte x coordinate
    let encoded_point = public_key.to_encoded_point(true);
    let compressed_bytes = encoded_point.as_bytes();
    if compressed_bytes.len() != COMPRESSED_PUBLIC_KEY_LEN {
        return Err(Error::Arithmetic(format!(
            "encoded point has {} bytes, expected {}",
            compressed_bytes.len(),
            COMPRESSED_PUBLIC_KEY_LEN
        )));
    }

    let mut result = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
    result.copy_from_slice(compressed_bytes);

    Ok(result)
}
