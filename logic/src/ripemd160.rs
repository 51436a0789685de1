use ripemd::{Digest, Ripemd160};

use crate::sha256;

pub const HASH160_LEN: usize = 20;

pub fn ripemd160_from_bytes(input: &[u8]) -> [u8; HASH160_LEN] {
    Ripemd160::digest(input).into()
}

/// RIPEMD160(SHA256(input))
pub fn hash160_from_bytes(input: &[u8]) -> [u8; HASH160_LEN] {
    ripemd160_from_bytes(&sha256::sha256_from_bytes(input))
}
