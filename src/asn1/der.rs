//! Minimal DER reader/writer: tag/length/value framing, used by the PEM,
//! PKCS#8, RSA, and ECC key-shape modules.

use crate::error::CoreError;
use crate::mp_int::MpInt;

pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_BIT_STRING: u8 = 0x03;
pub const TAG_OCTET_STRING: u8 = 0x04;
pub const TAG_NULL: u8 = 0x05;
pub const TAG_OID: u8 = 0x06;
pub const TAG_SEQUENCE: u8 = 0x30;
pub const TAG_CONTEXT_0: u8 = 0xa0;
pub const TAG_CONTEXT_1: u8 = 0xa1;

/// A parsed (but not necessarily fully-decoded) DER element: its tag, the
/// raw bytes of its value, and — for constructed types — the parsed
/// immediate children, built lazily by [`DerReader::children`].
#[derive(Debug, Clone)]
pub struct DerElement<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}

impl<'a> DerElement<'a> {
    pub fn children(&self) -> Result<Vec<DerElement<'a>>, CoreError> {
        let mut reader = DerReader::new(self.value);
        let mut out = Vec::new();
        while !reader.is_empty() {
            out.push(reader.read_element()?);
        }
        Ok(out)
    }

    pub fn as_integer(&self) -> Result<MpInt, CoreError> {
        if self.tag != TAG_INTEGER {
            return Err(CoreError::BadArgument);
        }
        if self.value.is_empty() {
            return Err(CoreError::BadArgument);
        }
        let negative = self.value[0] & 0x80 != 0;
        let magnitude = MpInt::from_bytes_be(self.value);
        Ok(if negative {
            // Two's-complement negative INTEGER: value - 2^(8*len).
            let span = MpInt::from_u64(1).shl(self.value.len() * 8);
            magnitude.sub(&span)
        } else {
            magnitude
        })
    }

    pub fn as_oid(&self) -> Result<Vec<u32>, CoreError> {
        if self.tag != TAG_OID {
            return Err(CoreError::BadArgument);
        }
        decode_oid(self.value)
    }
}

/// Streaming DER reader over a byte slice.
pub struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        DerReader { input, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Reads one tag/length/value triple; short-form length is 0x00-0x7f,
    /// long-form is `0x80 | n` followed by an `n`-byte big-endian length.
    pub fn read_element(&mut self) -> Result<DerElement<'a>, CoreError> {
        let tag = *self.input.get(self.pos).ok_or(CoreError::BadArgument)?;
        self.pos += 1;

        let first_len = *self.input.get(self.pos).ok_or(CoreError::BadArgument)?;
        self.pos += 1;

        let length = if first_len & 0x80 == 0 {
            first_len as usize
        } else {
            let n = (first_len & 0x7f) as usize;
            if n == 0 || n > 8 {
                return Err(CoreError::BadArgument);
            }
            let bytes = self.input.get(self.pos..self.pos + n).ok_or(CoreError::BadArgument)?;
            self.pos += n;
            bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize)
        };

        let value = self.input.get(self.pos..self.pos + length).ok_or(CoreError::BadArgument)?;
        self.pos += length;
        Ok(DerElement { tag, value })
    }
}

fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else {
        let bytes = len.to_be_bytes();
        let significant: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
        let mut out = vec![0x80 | significant.len() as u8];
        out.extend(significant);
        out
    }
}

/// Wraps `value` in a tag/length header.
pub fn encode_tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(encode_length(value.len()));
    out.extend_from_slice(value);
    out
}

pub fn encode_sequence(children: &[Vec<u8>]) -> Vec<u8> {
    let value: Vec<u8> = children.iter().flatten().copied().collect();
    encode_tlv(TAG_SEQUENCE, &value)
}

/// Encodes a non-negative `MpInt` as a DER INTEGER: big-endian magnitude,
/// with a leading `0x00` prepended when the high bit of the first byte is
/// already set (so the value is never misread as negative).
pub fn encode_integer(value: &MpInt) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes.is_empty() {
        bytes.push(0);
    }
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }
    encode_tlv(TAG_INTEGER, &bytes)
}

pub fn encode_null() -> Vec<u8> {
    encode_tlv(TAG_NULL, &[])
}

pub fn encode_octet_string(bytes: &[u8]) -> Vec<u8> {
    encode_tlv(TAG_OCTET_STRING, bytes)
}

/// BIT STRING with zero unused bits, the only form this crate emits.
pub fn encode_bit_string(bytes: &[u8]) -> Vec<u8> {
    let mut value = vec![0u8];
    value.extend_from_slice(bytes);
    encode_tlv(TAG_BIT_STRING, &value)
}

/// Encodes an object identifier using the standard base-128 arc encoding;
/// the first two arcs are folded into one byte as `40*arc0 + arc1`.
pub fn encode_oid(arcs: &[u32]) -> Vec<u8> {
    assert!(arcs.len() >= 2, "an OID needs at least two arcs");
    let mut value = vec![(arcs[0] * 40 + arcs[1]) as u8];
    for &arc in &arcs[2..] {
        value.extend(encode_base128(arc));
    }
    encode_tlv(TAG_OID, &value)
}

fn encode_base128(mut arc: u32) -> Vec<u8> {
    let mut groups = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        groups.push((arc & 0x7f) as u8 | 0x80);
        arc >>= 7;
    }
    groups.reverse();
    groups
}

pub fn decode_oid(value: &[u8]) -> Result<Vec<u32>, CoreError> {
    if value.is_empty() {
        return Err(CoreError::BadArgument);
    }
    let mut arcs = vec![(value[0] / 40) as u32, (value[0] % 40) as u32];
    let mut acc: u32 = 0;
    for &byte in &value[1..] {
        acc = (acc << 7) | (byte & 0x7f) as u32;
        if byte & 0x80 == 0 {
            arcs.push(acc);
            acc = 0;
        }
    }
    Ok(arcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oid_round_trips() {
        let arcs = [1, 2, 840, 10045, 3, 1, 7];
        let encoded = encode_oid(&arcs);
        let mut reader = DerReader::new(&encoded);
        let element = reader.read_element().unwrap();
        assert_eq!(element.tag, TAG_OID);
        assert_eq!(decode_oid(element.value).unwrap(), arcs);
    }

    #[test]
    fn integer_round_trips_including_high_bit_padding() {
        let value = MpInt::from_bytes_be(&[0xff, 0x01]);
        let encoded = encode_integer(&value);
        let mut reader = DerReader::new(&encoded);
        let element = reader.read_element().unwrap();
        assert_eq!(element.as_integer().unwrap(), value);
        // High bit of the first magnitude byte forced a leading 0x00.
        assert_eq!(element.value[0], 0x00);
    }

    #[test]
    fn sequence_of_integers_parses_children() {
        let seq = encode_sequence(&[encode_integer(&MpInt::from_u64(1)), encode_integer(&MpInt::from_u64(65537))]);
        let mut reader = DerReader::new(&seq);
        let element = reader.read_element().unwrap();
        let children = element.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].as_integer().unwrap(), MpInt::from_u64(1));
        assert_eq!(children[1].as_integer().unwrap(), MpInt::from_u64(65537));
    }

    #[test]
    fn long_form_length_round_trips_large_payload() {
        let payload = vec![0x42u8; 300];
        let encoded = encode_octet_string(&payload);
        let mut reader = DerReader::new(&encoded);
        let element = reader.read_element().unwrap();
        assert_eq!(element.value, &payload[..]);
    }
}
