//! 5.2 Message padding.
//!
//! A message of `l` bits is followed by a single `1` bit, `k` zero bits with
//! `l + 1 + k ≡ 448 (mod 512)`, and `l` itself as a 64-bit big-endian integer.
//! Messages here are always whole bytes, so the `1` bit is the byte `0x80`.

use alloc::vec::Vec;

use byteorder::{ByteOrder, BE};
use digest::generic_array::GenericArray;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::Error;
use crate::Block;

/// Length in bytes of `message_len` bytes once padded.
///
/// Fails when the bit length does not fit the 64-bit length field.
pub fn padded_len(message_len: usize) -> Result<usize, Error> {
    let too_long = || Error::MessageTooLong { len: message_len };
    (message_len as u64).checked_mul(8).ok_or_else(too_long)?;
    let unaligned = message_len
        .checked_add(1 + LENGTH_FIELD_LEN)
        .ok_or_else(too_long)?;
    let rem = unaligned % BLOCK_LEN;
    if rem == 0 {
        return Ok(unaligned);
    }
    unaligned
        .checked_add(BLOCK_LEN - rem)
        .ok_or_else(too_long)
}

/// Owned, padded message. Its length is always a non-zero multiple of 64.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedBuffer {
    bytes: Vec<u8>,
}

impl PaddedBuffer {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_LEN
    }

    /// Message blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.bytes
            .chunks_exact(BLOCK_LEN)
            .map(GenericArray::from_slice)
    }
}

/// Pads a copy of `input` into a freshly allocated buffer.
pub fn pad(input: &[u8]) -> Result<PaddedBuffer, Error> {
    let total = padded_len(input.len())?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(total)
        .map_err(|_| Error::Allocation { requested: total })?;
    bytes.extend_from_slice(input);
    append_padding(&mut bytes, total);
    Ok(PaddedBuffer { bytes })
}

/// Pads `message` in place, growing it only by the padding bytes.
pub(crate) fn pad_owned(mut message: Vec<u8>) -> Result<PaddedBuffer, Error> {
    let total = padded_len(message.len())?;
    message
        .try_reserve_exact(total - message.len())
        .map_err(|_| Error::Allocation { requested: total })?;
    append_padding(&mut message, total);
    Ok(PaddedBuffer { bytes: message })
}

fn append_padding(buf: &mut Vec<u8>, total: usize) {
    let bit_len = (buf.len() as u64) << 3;
    buf.push(0x80);
    buf.resize(total - LENGTH_FIELD_LEN, 0);
    let mut len_field = [0u8; LENGTH_FIELD_LEN];
    BE::write_u64(&mut len_field, bit_len);
    buf.extend_from_slice(&len_field);
}
