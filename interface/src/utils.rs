use crate::error::TrustifyError;

/// Splits the first byte off of `data`.
#[inline(always)]
pub fn read_u8(data: &[u8]) -> Result<(u8, &[u8]), TrustifyError> {
    match data {
        [byte, rest @ ..] => Ok((*byte, rest)),
        [] => Err(TrustifyError::InsufficientByteLength),
    }
}

/// Reads a `u8` length-prefixed UTF-8 string from the front of `data` and returns it along with
/// the remaining bytes.
///
/// Fails if the prefixed length exceeds `max_len`, if fewer bytes than the prefixed length remain,
/// or if the string bytes aren't valid UTF-8.
#[inline(always)]
pub fn read_str(data: &[u8], max_len: usize) -> Result<(&str, &[u8]), TrustifyError> {
    let (len, rest) = read_u8(data)?;
    let len = len as usize;
    if len > max_len {
        return Err(TrustifyError::StringTooLong);
    }
    if rest.len() < len {
        return Err(TrustifyError::InsufficientByteLength);
    }

    let (bytes, rest) = rest.split_at(len);
    let s = core::str::from_utf8(bytes).map_err(|_| TrustifyError::InvalidUtf8)?;

    Ok((s, rest))
}

/// Appends `s` to `dst` as a `u8` length-prefixed string.
///
/// Only the prefix width is enforced here. The per-field maximums are checked by the program so
/// that overlong values can still be encoded and rejected on chain.
#[cfg(feature = "std")]
pub fn write_str(dst: &mut std::vec::Vec<u8>, s: &str) -> Result<(), TrustifyError> {
    let len = u8::try_from(s.len()).map_err(|_| TrustifyError::StringTooLong)?;
    dst.push(len);
    dst.extend_from_slice(s.as_bytes());
    Ok(())
}
