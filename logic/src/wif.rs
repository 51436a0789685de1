use crate::base58;
use crate::error::Error;
use crate::secp256k1::PrivateKey;
use crate::secp256k1::constants::PRIVATE_KEY_LEN;

pub const WIF_MAINNET_VERSION: u8 = 0x80;
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// version + key + compression flag + checksum
const WIF_DECODED_LEN: usize = 1 + PRIVATE_KEY_LEN + 1 + base58::CHECKSUM_LEN;

/// Mainnet WIF for the compressed public key form: Base58Check(0x80 || d || 0x01).
pub fn private_key_to_wif(private_key: &PrivateKey) -> String {
    let mut body = [0u8; PRIVATE_KEY_LEN + 1];
    body[..PRIVATE_KEY_LEN].copy_from_slice(private_key.as_bytes());
    body[PRIVATE_KEY_LEN] = WIF_COMPRESSED_FLAG;

    let encoded = base58::base58check_encode(WIF_MAINNET_VERSION, &body);
    debug_assert_eq!(
        base58::base58_decode(&encoded).map(|decoded| decoded.len()),
        Ok(WIF_DECODED_LEN)
    );
    encoded
}

/// Recover the private key from a compressed mainnet WIF string.
pub fn wif_to_private_key(wif: &str) -> Result<PrivateKey, Error> {
    let (version, body) = base58::base58check_decode(wif.trim())?;
    if version != WIF_MAINNET_VERSION {
        return Err(Error::UnexpectedVersion {
            expected: WIF_MAINNET_VERSION,
            actual: version,
        });
    }
    if body.len() != PRIVATE_KEY_LEN + 1 {
        return Err(Error::InvalidPayloadLength {
            expected: PRIVATE_KEY_LEN + 1,
            actual: body.len(),
        });
    }
    if body[PRIVATE_KEY_LEN] != WIF_COMPRESSED_FLAG {
        return Err(Error::MissingCompressionFlag(body[PRIVATE_KEY_LEN]));
    }

    PrivateKey::from_bytes(&body[..PRIVATE_KEY_LEN])
}
