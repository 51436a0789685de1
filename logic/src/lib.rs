mod address;
mod base58;
mod bitcoin_keys;
mod error;
mod ripemd160;
mod secp256k1;
mod sha256;
mod wif;

pub use address::*;
pub use base58::*;
pub use bitcoin_keys::*;
pub use error::*;
pub use ripemd160::*;
pub use secp256k1::*;
pub use secp256k1::constants::*;
pub use sha256::*;
pub use wif::*;
