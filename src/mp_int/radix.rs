//! Radix (base 2-64) text I/O.

use super::{MpInt, Sign};
use crate::error::CoreError;

const DIGIT_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+/";

fn digit_value(c: u8) -> Option<u32> {
    DIGIT_ALPHABET.iter().position(|&d| d == c).map(|p| p as u32)
}

impl MpInt {
    /// Parses a signed integer in the given radix (2..=64). Leading
    /// whitespace and an optional leading `+`/`-` are tolerated; parsing
    /// stops at the first character that is not a valid digit in `radix`.
    pub fn read_radix(input: &str, radix: u32) -> Result<Self, CoreError> {
        if !(2..=64).contains(&radix) {
            return Err(CoreError::BadArgument);
        }
        let bytes = input.as_bytes();
        let mut i = 0;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let sign = match bytes.get(i) {
            Some(b'-') => {
                i += 1;
                Sign::Negative
            }
            Some(b'+') => {
                i += 1;
                Sign::Positive
            }
            _ => Sign::Positive,
        };

        let mut value = MpInt::zero();
        let radix_mp = MpInt::from_u64(radix as u64);
        let mut consumed_any = false;

        while i < bytes.len() {
            let Some(d) = digit_value(bytes[i]) else { break };
            if d >= radix {
                break;
            }
            value = value.mul(&radix_mp).add(&MpInt::from_u64(d as u64));
            consumed_any = true;
            i += 1;
        }

        if !consumed_any {
            return Err(CoreError::BadArgument);
        }

        value.sign = if value.is_zero() { Sign::Positive } else { sign };
        Ok(value)
    }

    /// Renders this value in the given radix (2..=64), most significant
    /// digit first, with a leading `-` for negative values.
    pub fn to_radix(&self, radix: u32) -> Result<String, CoreError> {
        if !(2..=64).contains(&radix) {
            return Err(CoreError::BadArgument);
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let radix_mp = MpInt::from_u64(radix as u64);
        let mut remaining = self.abs();
        let mut digits_lsb_first = Vec::new();

        while !remaining.is_zero() {
            let (q, r) = remaining.div_rem(&radix_mp)?;
            let digit = r.digits[0] as usize;
            digits_lsb_first.push(DIGIT_ALPHABET[digit] as char);
            remaining = q;
        }

        let mut out = String::with_capacity(digits_lsb_first.len() + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.extend(digits_lsb_first.into_iter().rev());
        Ok(out)
    }
}
