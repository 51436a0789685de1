use crate::address;
use crate::error::Error;
use crate::ripemd160::HASH160_LEN;
use crate::secp256k1::{self, PrivateKey};
use crate::secp256k1::constants::COMPRESSED_PUBLIC_KEY_LEN;
use crate::wif;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitcoinKeys {
    pub private_key: PrivateKey,
    pub public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN], // compressed secp256k1 public key
    pub public_key_hash: [u8; HASH160_LEN],          // RIPEMD160(SHA256(public_key))
    pub wif: String,                                 // Base58Check(0x80 || private_key || 0x01)
    pub address: String,                             // Base58Check(0x00 || public_key_hash)
}

/// Pure function - the same key always yields the same record
pub fn derive_bitcoin_keys(private_key: &PrivateKey) -> Result<BitcoinKeys, Error> {
    let public_key = secp256k1::secp256k1_derive_public_key(private_key)?;
    let wif = wif::private_key_to_wif(private_key);
    let public_key_hash = address::public_key_hash(&public_key);
    let address = address::public_key_hash_to_p2pkh_address(&public_key_hash);

    Ok(BitcoinKeys {
        private_key: *private_key,
        public_key,
        public_key_hash,
        wif,
        address,
    })
}

pub fn derive_bitcoin_keys_from_hex(private_key_hex: &str) -> Result<BitcoinKeys, Error> {
    let private_key = PrivateKey::from_hex(private_key_hex)?;
    derive_bitcoin_keys(&private_key)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::base58;
    use crate::sha256;
    use proptest::prelude::*;

    #[test]
    fn should_derive_bitcoin_keys_for_one() {
        let result = derive_bitcoin_keys_from_hex("0000000000000000000000000000000000000000000000000000000000000001").unwrap();

        assert_eq!(
            hex::encode_upper(result.public_key),
            "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
        );
        assert_eq!(result.wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(hex::encode(result.public_key_hash), "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(result.address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn should_not_produce_uncompressed_address() {
        // 1EHNa6Q4... is the address of the 65-byte uncompressed key for 1
        let result = derive_bitcoin_keys_from_hex("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_ne!(result.address, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }

    #[test]
    fn should_derive_bitcoin_keys_for_random_key() {
        let result = derive_bitcoin_keys_from_hex("152d53723da4203478574b153143a7eaa921a8d82c629517d6b18949f0111abb").unwrap();
        assert_eq!(
            hex::encode(result.public_key),
            "039163ab449d4b90de13ce60b504bfc27a4aed378c1f8338686156b91445637c8d"
        );
        assert!(result.address.starts_with('1'));
        assert!(result.wif.starts_with('K') || result.wif.starts_with('L'));
    }

    #[test]
    fn should_fail_on_out_of_range_key() {
        let result = derive_bitcoin_keys_from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(result, Err(Error::InvalidScalar));
    }

    #[test]
    fn should_fail_on_malformed_key() {
        let result = derive_bitcoin_keys_from_hex("not a key");
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    fn checksum_is_valid(encoded: &str) -> bool {
        let decoded = base58::base58_decode(encoded).unwrap();
        let (payload, checksum) = decoded.split_at(decoded.len() - 4);
        sha256::double_sha256_from_bytes(payload)[..4] == *checksum
    }

    proptest! {
        #[test]
        fn derivation_is_deterministic(bytes in any::<[u8; 32]>()) {
            let private_key = PrivateKey::from_bytes(&bytes);
            prop_assume!(private_key.is_ok());
            let private_key = private_key.unwrap();

            let first = derive_bitcoin_keys(&private_key).unwrap();
            let second = derive_bitcoin_keys(&private_key).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn wif_round_trips_to_private_key(bytes in any::<[u8; 32]>()) {
            let private_key = PrivateKey::from_bytes(&bytes);
            prop_assume!(private_key.is_ok());
            let private_key = private_key.unwrap();

            let result = derive_bitcoin_keys(&private_key).unwrap();
            let recovered = wif::wif_to_private_key(&result.wif).unwrap();
            prop_assert_eq!(recovered.as_bytes(), &bytes);
        }

        #[test]
        fn encodings_carry_valid_checksums_and_versions(bytes in any::<[u8; 32]>()) {
            let private_key = PrivateKey::from_bytes(&bytes);
            prop_assume!(private_key.is_ok());
            let private_key = private_key.unwrap();

            let result = derive_bitcoin_keys(&private_key).unwrap();
            prop_assert!(checksum_is_valid(&result.wif));
            prop_assert!(checksum_is_valid(&result.address));

            let decoded_address = base58::base58_decode(&result.address).unwrap();
            prop_assert_eq!(decoded_address.len(), 25);
            prop_assert_eq!(decoded_address[0], address::P2PKH_MAINNET_VERSION);
            prop_assert!(result.address.starts_with('1'));

            let hash = address::p2pkh_address_to_public_key_hash(&result.address).unwrap();
            prop_assert_eq!(hash, result.public_key_hash);
        }

        #[test]
        fn lengths_are_fixed(bytes in any::<[u8; 32]>()) {
            let private_key = PrivateKey::from_bytes(&bytes);
            prop_assume!(private_key.is_ok());
            let private_key = private_key.unwrap();

            let result = derive_bitcoin_keys(&private_key).unwrap();
            prop_assert_eq!(hex::encode(result.public_key).len(), 66);
            prop_assert_eq!(result.public_key_hash.len(), 20);
            prop_assert!(result.public_key[0] == 0x02 || result.public_key[0] == 0x03);
        }
    }
}
