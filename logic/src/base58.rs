use crate::error::Error;
use crate::sha256;

pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const CHECKSUM_LEN: usize = 4;
const VERSION_LEN: usize = 1;

static ALPHABET: bs58::Alphabet = bs58::Alphabet::new_unwrap(BASE58_ALPHABET);

/// Plain Base58: big-endian base-256 to base-58, one leading '1' per leading 0x00.
pub fn base58_encode(input: &[u8]) -> String {
    bs58::encode(input)
        .with_alphabet(&ALPHABET)
        .into_string()
}

pub fn base58_decode(input: &str) -> Result<Vec<u8>, Error> {
    let bytes = bs58::decode(input)
        .with_alphabet(&ALPHABET)
        .into_vec()?;
    Ok(bytes)
}

/// First 4 bytes of SHA256(SHA256(payload)).
pub fn base58check_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256::double_sha256_from_bytes(payload);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}

/// Base58(version || body || checksum(version || body)).
pub fn base58check_encode(version: u8, body: &[u8]) -> String {
    let mut payload = Vec::with_capacity(VERSION_LEN + body.len() + CHECKSUM_LEN);
    payload.push(version);
    payload.extend_from_slice(body);

    let checksum = base58check_checksum(&payload);
    payload.extend_from_slice(&checksum);

    base58_encode(&payload)
}

/// Inverse of [`base58check_encode`]; returns the version byte and the body.
pub fn base58check_decode(input: &str) -> Result<(u8, Vec<u8>), Error> {
    let decoded = base58_decode(input)?;
    if decoded.len() < VERSION_LEN + CHECKSUM_LEN {
        return Err(Error::InvalidPayloadLength {
            expected: VERSION_LEN + CHECKSUM_LEN,
            actual: decoded.len(),
        });
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if base58check_checksum(payload) != checksum {
        return Err(Error::ChecksumMismatch);
    }

    Ok((payload[0], payload[VERSION_LEN..].to_vec()))
}
