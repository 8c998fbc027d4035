/// Errors that can occur when parsing a hex-encoded 32-byte identifier.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("identifier must start with '0x'")]
    InvalidPrefix,
    #[error("identifier must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("identifier payload is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("identifier payload must be exactly 32 bytes")]
    InvalidPayloadLength,
}

/// Number of raw bytes contained in an identifier.
pub const ID_BYTES: usize = 32;
/// Expected string length of an encoded identifier (`0x` + 64 hex chars).
pub const ID_STRING_LENGTH: usize = 2 + ID_BYTES * 2;

/// Encode a 32-byte identifier into the `0x`-prefixed hex format.
pub fn encode_id(bytes: &[u8; ID_BYTES]) -> String {
    let mut encoded = String::with_capacity(ID_STRING_LENGTH);
    encoded.push_str("0x");
    encoded.push_str(&hex::encode(bytes));
    encoded
}

/// Attempt to decode a `0x`-prefixed hex identifier string into raw bytes.
pub fn decode_id(id: &str) -> Result<[u8; ID_BYTES], IdError> {
    if !id.starts_with("0x") {
        return Err(IdError::InvalidPrefix);
    }

    if id.len() != ID_STRING_LENGTH {
        return Err(IdError::InvalidLength {
            expected: ID_STRING_LENGTH,
            actual: id.len(),
        });
    }

    let payload = &id[2..];
    let decoded = hex::decode(payload)?;

    let bytes: [u8; ID_BYTES] = decoded
        .try_into()
        .map_err(|_| IdError::InvalidPayloadLength)?;

    Ok(bytes)
}

/// Declare a 32-byte identifier newtype with hex string serde round-tripping.
///
/// The generated type serialises as its `0x`-prefixed hex form in JSON,
/// compares/hashes by raw bytes and defaults to all zeroes.
macro_rules! hex_id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(pub [u8; ID_BYTES]);

        impl $name {
            /// Wrap raw identifier bytes.
            pub const fn new(bytes: [u8; ID_BYTES]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; ID_BYTES] {
                &self.0
            }

            /// Encode as a `0x`-prefixed hex string.
            pub fn to_hex(&self) -> String {
                encode_id(&self.0)
            }

            /// Decode from a `0x`-prefixed hex string.
            pub fn from_hex(id: &str) -> Result<Self, IdError> {
                decode_id(id).map(Self)
            }
        }

        impl From<[u8; ID_BYTES]> for $name {
            fn from(value: [u8; ID_BYTES]) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                encode_id(&value.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                decode_id(&value).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&encode_id(&self.0))
            }
        }
    };
}

pub(crate) use hex_id_type;
