/// Order `n` of the secp256k1 base point, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

pub const PRIVATE_KEY_LEN: usize = 32;

/// 0x02/0x03 parity prefix + 32-byte x coordinate.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

pub const EVEN_Y_PREFIX: u8 = 0x02;
pub const ODD_Y_PREFIX: u8 = 0x03;
