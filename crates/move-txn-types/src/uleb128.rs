//! ULEB128 varint codec.
//!
//! Used only for lengths and counts. Payload integers are fixed-width little-endian.
//!
//! ```
//! use move_txn_types::uleb128;
//!
//! assert_eq!(uleb128::encode(128u32), vec![0x80, 0x01]);
//! assert_eq!(uleb128::decode::<u32>(&[0x80, 0x01]).unwrap(), (128, 2));
//! ```

use crate::error::CodecError;

/// Unsigned integer types that can be the target of a ULEB128 decode.
pub trait UlebInt: Copy + Sized {
    /// Bit width of the type.
    const BITS: u32;
    /// Type name used in overflow errors.
    const NAME: &'static str;

    /// Widen to `u64` for encoding.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`; `None` if the value does not fit.
    fn from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_uleb_int {
    ($($t:ty),*) => {
        $(
            impl UlebInt for $t {
                const BITS: u32 = <$t>::BITS;
                const NAME: &'static str = stringify!($t);

                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn from_u64(value: u64) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_uleb_int!(u8, u16, u32, u64, usize);

/// Encode `value` as minimal-length ULEB128.
pub fn encode<T: UlebInt>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    encode_into(&mut out, value);
    out
}

/// Append the ULEB128 encoding of `value` to `out`.
pub fn encode_into<T: UlebInt>(out: &mut Vec<u8>, value: T) {
    let mut v = value.to_u64();
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode a ULEB128 value of type `T` from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed. On error nothing is
/// considered consumed. Errors:
/// - [`CodecError::TruncatedInput`] if no byte without the continuation bit is found
/// - [`CodecError::Overflow`] if the value needs more bits than `T` has
/// - [`CodecError::NonCanonicalVarint`] if a multi-byte encoding ends in a zero group
pub fn decode<T: UlebInt>(bytes: &[u8]) -> Result<(T, usize), CodecError> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let chunk = u64::from(byte & 0x7f);

        if shift >= T::BITS || (shift > 0 && chunk >> (T::BITS.min(64) - shift) != 0) {
            return Err(overflow::<T>(&bytes[..=i]));
        }
        value |= chunk << shift;

        if byte & 0x80 == 0 {
            if i > 0 && byte == 0 {
                return Err(CodecError::NonCanonicalVarint);
            }
            let narrowed = T::from_u64(value).ok_or_else(|| overflow::<T>(&bytes[..=i]))?;
            return Ok((narrowed, i + 1));
        }
        shift += 7;
    }

    Err(CodecError::TruncatedInput { what: "uleb128" })
}

fn overflow<T: UlebInt>(consumed: &[u8]) -> CodecError {
    CodecError::Overflow {
        target: T::NAME,
        detail: format!("0x{}", hex::encode(consumed)),
    }
}
