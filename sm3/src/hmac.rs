//! HMAC-SM3 (RFC 2104 construction over SM3).

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

use crate::consts::{BLOCK_LEN, DIGEST_LEN, IPAD, OPAD};
use crate::error::Error;
use crate::sm3::{hash_bytes, Output};

/// Inner and outer key pads for one key.
#[derive(Clone)]
pub struct HmacContext {
    inner_pad: [u8; BLOCK_LEN],
    outer_pad: [u8; BLOCK_LEN],
}

impl HmacContext {
    /// Keys longer than one block are replaced by their digest; shorter keys
    /// are zero-extended.
    pub fn new(key: &[u8]) -> Result<HmacContext, Error> {
        let hashed;
        let key = if key.len() > BLOCK_LEN {
            hashed = hash_bytes(key)?;
            hashed.as_slice()
        } else {
            key
        };

        let mut inner_pad = [IPAD; BLOCK_LEN];
        let mut outer_pad = [OPAD; BLOCK_LEN];
        for (i, &k) in key.iter().enumerate() {
            inner_pad[i] ^= k;
            outer_pad[i] ^= k;
        }
        Ok(HmacContext {
            inner_pad,
            outer_pad,
        })
    }

    pub fn authenticate(&self, message: &[u8]) -> Result<Output, Error> {
        let inner_len = BLOCK_LEN
            .checked_add(message.len())
            .ok_or(Error::MessageTooLong { len: message.len() })?;
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(inner_len)
            .map_err(|_| Error::Allocation {
                requested: inner_len,
            })?;
        inner.extend_from_slice(&self.inner_pad);
        inner.extend_from_slice(message);
        let inner_hash = hash_bytes(&inner)?;

        let mut outer = [0u8; BLOCK_LEN + DIGEST_LEN];
        outer[..BLOCK_LEN].copy_from_slice(&self.outer_pad);
        outer[BLOCK_LEN..].copy_from_slice(&inner_hash);
        hash_bytes(&outer)
    }

    /// Recomputes the tag for `message` and compares it to `tag` in constant time.
    pub fn verify(&self, message: &[u8], tag: &[u8]) -> Result<bool, Error> {
        let expected = self.authenticate(message)?;
        if tag.len() != DIGEST_LEN {
            return Ok(false);
        }
        Ok(expected.as_slice().ct_eq(tag).into())
    }
}

/// HMAC-SM3 of `message` under `key`.
pub fn hmac(key: &[u8], message: &[u8]) -> Result<Output, Error> {
    HmacContext::new(key)?.authenticate(message)
}
