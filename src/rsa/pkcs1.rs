//! PKCS#1 v1.5 padding: encode/decode the `{0x00, type, padding…, 0x00,
//! message}` block format.

use crate::digest::Digest;
use crate::mp_int::MpInt;
use crate::prng::RandomGenerator;
use crate::rsa::{BlockType, RsaError};

/// Builds a full-width PKCS#1 v1.5 block and returns it as an `MpInt`,
/// ready for `exptmod`. `message.len()` must be `<= n_bytes - 11`.
pub fn encode<D: Digest>(
    message: &[u8],
    n_bytes: usize,
    block_type: BlockType,
    rng: &mut RandomGenerator<D>,
) -> Result<MpInt, RsaError> {
    if message.len() > n_bytes.saturating_sub(11) {
        return Err(RsaError::MessageTooLong);
    }
    let pad_len = n_bytes - message.len() - 3;
    let mut block = Vec::with_capacity(n_bytes);
    block.push(0x00);
    let type_byte = match block_type {
        BlockType::Zero => 0x00,
        BlockType::PrivateSign => 0x01,
        BlockType::PublicEncrypt => 0x02,
    };
    block.push(type_byte);

    match block_type {
        BlockType::Zero => block.extend(std::iter::repeat_n(0x00u8, pad_len)),
        BlockType::PrivateSign => block.extend(std::iter::repeat_n(0xffu8, pad_len)),
        BlockType::PublicEncrypt => {
            let mut padding = vec![0u8; pad_len];
            for byte in padding.iter_mut() {
                let mut one = [0u8; 1];
                loop {
                    rng.fill_bytes(&mut one);
                    if one[0] != 0 {
                        break;
                    }
                }
                *byte = one[0];
            }
            block.extend(padding);
        }
    }
    block.push(0x00);
    block.extend_from_slice(message);
    Ok(MpInt::from_bytes_be(&block))
}

/// Strips a PKCS#1 v1.5 block back to its message bytes, verifying the
/// leading `0x00`, the expected block type, and the padding shape.
pub fn decode(value: &MpInt, n_bytes: usize, expected_type: BlockType) -> Result<Vec<u8>, RsaError> {
    let block = value.to_bytes_be_exact(n_bytes)?;
    if block.len() < 11 || block[0] != 0x00 {
        return Err(RsaError::BadPadding);
    }
    let type_byte = match expected_type {
        BlockType::Zero => 0x00,
        BlockType::PrivateSign => 0x01,
        BlockType::PublicEncrypt => 0x02,
    };
    if block[1] != type_byte {
        return Err(RsaError::BadPadding);
    }

    let mut i = 2;
    match expected_type {
        BlockType::Zero => {
            while i < block.len() && block[i] == 0x00 {
                i += 1;
            }
        }
        BlockType::PrivateSign => {
            while i < block.len() && block[i] == 0xff {
                i += 1;
            }
        }
        BlockType::PublicEncrypt => {
            while i < block.len() && block[i] != 0x00 {
                i += 1;
            }
        }
    }
    if i >= block.len() || block[i] != 0x00 {
        return Err(RsaError::BadPadding);
    }
    Ok(block[i + 1..].to_vec())
}
