use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// A problem with one share's encoded value. Local to that record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("digit {ch:?} has value {digit}, out of range for base {base}")]
    DigitOutOfRange { ch: char, digit: u32, base: u32 },
}

/// Decodes a most-significant-digit-first string in the given radix into an
/// unsigned integer.
///
/// Decimal digits map to 0..=9 and letters, case-insensitively, to 10..=35.
/// The accumulator is a [BigUint] so long high-radix strings cannot overflow;
/// bounding `base` to [2,36] is the caller's job (see [crate::share]).
///
/// The empty string decodes to 0.
pub fn decode(value: &str, base: u32) -> Result<BigUint, DecodeError> {
    let mut result = BigUint::zero();
    for (pos, ch) in value.chars().enumerate() {
        let digit = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => ch as u32 - 'a' as u32 + 10,
            'A'..='Z' => ch as u32 - 'A' as u32 + 10,
            _ => return Err(DecodeError::InvalidCharacter { ch, pos }),
        };
        if digit >= base {
            return Err(DecodeError::DigitOutOfRange { ch, digit, base });
        }
        result = result * base + digit;
    }
    Ok(result)
}
