use logic::BitcoinKeys;

/// The three-line stdout report, each line newline-terminated.
pub fn format_report(keys: &BitcoinKeys) -> String {
    format!(
        "Compressed PubKey: {}\nWIF: {}\nAddress: {}\n",
        hex::encode_upper(keys.public_key),
        keys.wif,
        keys.address
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_format_report_for_one() {
        let keys = logic::derive_bitcoin_keys_from_hex("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_eq!(
            format_report(&keys),
            "Compressed PubKey: 0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798\n\
             WIF: KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn\n\
             Address: 1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH\n"
        );
    }

    #[test]
    fn should_use_uppercase_hex_for_public_key() {
        let keys = logic::derive_bitcoin_keys_from_hex("152d53723da4203478574b153143a7eaa921a8d82c629517d6b18949f0111abb").unwrap();
        let report = format_report(&keys);
        let first_line = report.lines().next().unwrap();
        assert_eq!(first_line, "Compressed PubKey: 039163AB449D4B90DE13CE60B504BFC27A4AED378C1F8338686156B91445637C8D");
        assert_eq!(report.lines().count(), 3);
    }
}
