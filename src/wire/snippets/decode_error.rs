/// Malformed input found while decoding.
#[derive(Debug)]
pub enum DecodeError {
    UnexpectedEof,
    InvalidBool(u8),
    InvalidEnumOrdinal { type_name: &'static str, ordinal: i64 },
    InvalidUnionIndex { type_name: &'static str, index: i64 },
    NegativeLength(i64),
    TooManyItems(i64),
    IntOutOfRange(i64),
    VarintOverflow,
    InvalidUtf8(std::str::Utf8Error),
    Io(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeError::InvalidBool(byte) => write!(f, "invalid boolean byte {:#04x}", byte),
            DecodeError::InvalidEnumOrdinal { type_name, ordinal } => {
                write!(f, "ordinal {} out of range for enum {}", ordinal, type_name)
            }
            DecodeError::InvalidUnionIndex { type_name, index } => {
                write!(f, "branch index {} out of range for union {}", index, type_name)
            }
            DecodeError::NegativeLength(len) => write!(f, "negative length {}", len),
            DecodeError::TooManyItems(count) => write!(f, "collection of {} items exceeds the limit", count),
            DecodeError::IntOutOfRange(value) => write!(f, "value {} does not fit in an int", value),
            DecodeError::VarintOverflow => write!(f, "varint longer than 10 bytes"),
            DecodeError::InvalidUtf8(err) => write!(f, "invalid UTF-8 in string: {}", err),
            DecodeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(err) => Some(err),
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::UnexpectedEof
        } else {
            DecodeError::Io(err)
        }
    }
}
