//! Error types for canonical encoding, decoding and parsing.
//!
//! Every failure in this crate is reported to the caller as a [`CodecError`];
//! nothing is coerced, retried or aborted internally.

use crate::type_tag::MAX_TYPE_TAG_NESTING;

/// Malformed canonical string input.
///
/// Each variant carries the offending substring so callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `<` and `>` do not nest properly.
    UnbalancedBrackets(String),

    /// A `::`-separated path has the wrong number of segments.
    SegmentCount {
        /// The path that was split
        input: String,
        /// Number of segments the grammar requires
        expected: usize,
        /// Number of segments actually present
        found: usize,
    },

    /// Address text is not 1..=64 hex digits with an optional `0x` prefix.
    InvalidAddress(String),

    /// Name does not match `[A-Za-z_][A-Za-z0-9_]*`.
    InvalidIdentifier(String),

    /// A generic argument list contains an empty slot (`S<>`, `S<u8,>`).
    EmptyTypeArgument(String),

    /// Decimal integer text could not be parsed.
    InvalidInteger(String),

    /// Hex text could not be decoded.
    InvalidHex(String),

    /// Generic arguments nest deeper than the limit (the limit is carried).
    NestingTooDeep(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnbalancedBrackets(s) => write!(f, "unbalanced angle brackets in '{s}'"),
            ParseError::SegmentCount {
                input,
                expected,
                found,
            } => write!(
                f,
                "expected {expected} '::'-separated segments in '{input}', found {found}"
            ),
            ParseError::InvalidAddress(s) => write!(f, "invalid address '{s}'"),
            ParseError::InvalidIdentifier(s) => write!(f, "invalid identifier '{s}'"),
            ParseError::EmptyTypeArgument(s) => write!(f, "empty type argument in '{s}'"),
            ParseError::InvalidInteger(s) => write!(f, "invalid unsigned integer '{s}'"),
            ParseError::InvalidHex(s) => write!(f, "invalid hex string '{s}'"),
            ParseError::NestingTooDeep(limit) => {
                write!(f, "type nesting exceeds limit of {limit}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error produced while encoding, decoding or parsing canonical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed canonical string.
    Parse(ParseError),

    /// Value does not fit the target integer width.
    Overflow {
        /// Target type name (e.g. `u8`, `u128`)
        target: &'static str,
        /// Input that overflowed, rendered for display
        detail: String,
    },

    /// Tagged union variant that this codec does not handle.
    UnsupportedVariant(String),

    /// Input ended before the value was complete.
    TruncatedInput {
        /// What was being read
        what: &'static str,
    },

    /// Multi-byte ULEB128 value with a redundant trailing zero group.
    NonCanonicalVarint,

    /// Boolean byte other than 0 or 1.
    InvalidBool,

    /// Length-prefixed string is not valid UTF-8.
    InvalidUtf8,

    /// Bytes left over after a complete value was decoded.
    TrailingBytes,

    /// Type tag nests deeper than the configured limit.
    NestingTooDeep(usize),

    /// A signing message did not start with the raw-transaction prefix.
    MissingSigningPrefix,

    /// Any other failure reported by the `bcs` codec.
    Malformed(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Parse(e) => write!(f, "parse error: {e}"),
            CodecError::Overflow { target, detail } => {
                write!(f, "value {detail} overflows {target}")
            }
            CodecError::UnsupportedVariant(what) => write!(f, "unsupported variant: {what}"),
            CodecError::TruncatedInput { what } => {
                write!(f, "truncated input while reading {what}")
            }
            CodecError::NonCanonicalVarint => write!(f, "non-canonical uleb128 encoding"),
            CodecError::InvalidBool => write!(f, "bool byte is neither 0 nor 1"),
            CodecError::InvalidUtf8 => write!(f, "string is not valid utf-8"),
            CodecError::TrailingBytes => write!(f, "trailing bytes after value"),
            CodecError::NestingTooDeep(limit) => {
                write!(f, "type tag nesting exceeds limit of {limit}")
            }
            CodecError::MissingSigningPrefix => {
                write!(f, "signing message does not start with the raw transaction prefix")
            }
            CodecError::Malformed(msg) => write!(f, "malformed canonical bytes: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CodecError {
    fn from(e: ParseError) -> Self {
        CodecError::Parse(e)
    }
}

impl From<bcs::Error> for CodecError {
    fn from(e: bcs::Error) -> Self {
        match e {
            bcs::Error::Eof => CodecError::TruncatedInput {
                what: "canonical value",
            },
            bcs::Error::RemainingInput => CodecError::TrailingBytes,
            bcs::Error::ExpectedBoolean => CodecError::InvalidBool,
            bcs::Error::Utf8 => CodecError::InvalidUtf8,
            bcs::Error::NonCanonicalUleb128Encoding => CodecError::NonCanonicalVarint,
            bcs::Error::IntegerOverflowDuringUleb128Decoding => CodecError::Overflow {
                target: "u32",
                detail: "uleb128 length or variant index".to_string(),
            },
            bcs::Error::ExceededMaxLen(len) => CodecError::Overflow {
                target: "sequence length",
                detail: len.to_string(),
            },
            bcs::Error::ExceededContainerDepthLimit(_) => {
                CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING)
            }
            // Only enum variant checks raise custom errors on the wire shapes.
            bcs::Error::Custom(msg) => CodecError::UnsupportedVariant(msg),
            other => CodecError::Malformed(other.to_string()),
        }
    }
}
