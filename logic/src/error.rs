use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not hex, or does not decode to exactly 32 bytes.
    #[error("malformed private key: {0}")]
    MalformedInput(String),

    /// Scalar is zero or not below the secp256k1 group order.
    #[error("private key is out of range: must satisfy 0 < key < n")]
    InvalidScalar,

    /// The curve primitive rejected a scalar that already passed validation.
    #[error("elliptic curve arithmetic failed: {0}")]
    Arithmetic(String),

    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    #[error("base58check checksum mismatch")]
    ChecksumMismatch,

    #[error("unexpected version byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedVersion { expected: u8, actual: u8 },

    #[error("missing compression flag: expected 0x01, got {0:#04x}")]
    MissingCompressionFlag(u8),
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::MalformedInput(e.to_string())
    }
}

impl From<k256::elliptic_curve::Error> for Error {
    fn from(e: k256::elliptic_curve::Error) -> Self {
        Error::Arithmetic(e.to_string())
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Self {
        Error::InvalidBase58(e.to_string())
    }
}
