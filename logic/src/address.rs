use crate::base58;
use crate::error::Error;
use crate::ripemd160::{self, HASH160_LEN};
use crate::secp256k1::constants::COMPRESSED_PUBLIC_KEY_LEN;

pub const P2PKH_MAINNET_VERSION: u8 = 0x00;

/// version + hash160 + checksum
const P2PKH_DECODED_LEN: usize = 1 + HASH160_LEN + base58::CHECKSUM_LEN;

pub fn public_key_hash(public_key: &[u8; COMPRESSED_PUBLIC_KEY_LEN]) -> [u8; HASH160_LEN] {
    ripemd160::hash160_from_bytes(public_key)
}

/// Legacy mainnet P2PKH address: Base58Check(0x00 || RIPEMD160(SHA256(pubkey))).
pub fn public_key_to_p2pkh_address(public_key: &[u8; COMPRESSED_PUBLIC_KEY_LEN]) -> String {
    public_key_hash_to_p2pkh_address(&public_key_hash(public_key))
}

pub fn public_key_hash_to_p2pkh_address(public_key_hash: &[u8; HASH160_LEN]) -> String {
    let encoded = base58::base58check_encode(P2PKH_MAINNET_VERSION, public_key_hash);
    debug_assert_eq!(
        base58::base58_decode(&encoded).map(|decoded| decoded.len()),
        Ok(P2PKH_DECODED_LEN)
    );
    encoded
}

/// Extract the Hash160 from a mainnet P2PKH address.
pub fn p2pkh_address_to_public_key_hash(address: &str) -> Result<[u8; HASH160_LEN], Error> {
    let (version, body) = base58::base58check_decode(address.trim())?;
    if version != P2PKH_MAINNET_VERSION {
        return Err(Error::UnexpectedVersion {
            expected: P2PKH_MAINNET_VERSION,
            actual: version,
        });
    }

    body.as_slice()
        .try_into()
        .map_err(|_| Error::InvalidPayloadLength {
            expected: HASH160_LEN,
            actual: body.len(),
        })
}
