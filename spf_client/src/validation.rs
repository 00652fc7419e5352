//! Validation and conversion utilities shared by entries, keys, and ciphertexts.

use spf_wire::{decode_exact, BitWidth, SerializeError};

use crate::error::{CallSite, Error};

/// Parse a raw bit width, naming the operation that supplied it on failure.
pub(crate) fn parse_bit_width(bit_width: u32, site: CallSite) -> Result<BitWidth, Error> {
    BitWidth::try_from(bit_width).map_err(|e| Error::InvalidBitWidth { site, got: e.0 })
}

/// Inclusive value range for a bit width and signedness.
pub(crate) fn value_range(bit_width: BitWidth, signed: bool) -> (i128, i128) {
    if signed {
        (
            bit_width.min_signed() as i128,
            bit_width.max_signed() as i128,
        )
    } else {
        (0, bit_width.max_unsigned() as i128)
    }
}

/// Check that `value` is representable with `bit_width` and `signed`.
pub(crate) fn check_value(value: i128, bit_width: BitWidth, signed: bool) -> Result<(), Error> {
    if !signed && value < 0 {
        return Err(Error::NegativeUnsignedValue { value });
    }
    let (min, max) = value_range(bit_width, signed);
    if value < min || value > max {
        return Err(Error::ValueOverflow {
            value,
            bit_width,
            min,
            max,
        });
    }
    Ok(())
}

/// Range check `value` and convert it to the unsigned pattern sent on the wire.
///
/// Signed values use two's complement at `bit_width`.
pub(crate) fn to_wire_value(value: i128, bit_width: BitWidth, signed: bool) -> Result<u64, Error> {
    check_value(value, bit_width, signed)?;
    Ok(if signed {
        bit_width.signed_to_unsigned(value as i64)
    } else {
        value as u64
    })
}

/// Range check every value of an array, failing on the first bad one.
pub(crate) fn check_values(
    values: &[i128],
    bit_width: BitWidth,
    signed: bool,
) -> Result<(), Error> {
    values
        .iter()
        .try_for_each(|&value| check_value(value, bit_width, signed))
}

/// Serialize a value to MessagePack bytes with consistent error handling.
pub(crate) fn to_msgpack<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(rmp_serde::to_vec(value).map_err(SerializeError::from)?)
}

/// Deserialize a value from MessagePack bytes, rejecting trailing data.
pub(crate) fn from_msgpack<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    Ok(decode_exact(bytes)?)
}
