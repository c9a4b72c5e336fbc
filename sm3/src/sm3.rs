use alloc::vec::Vec;

use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};
use tracing::trace;

use crate::error::Error;
use crate::pad::{pad, pad_owned, PaddedBuffer};
use crate::utils::{compress, HashState};

type BlockSize = U64;
pub type Block = GenericArray<u8, U64>;
pub type Output = GenericArray<u8, U32>;

pub(crate) fn digest_padded(padded: &PaddedBuffer) -> Output {
    trace!(
        padded_len = padded.len(),
        blocks = padded.block_count(),
        "sm3 compress"
    );
    let mut state = HashState::init();
    for block in padded.blocks() {
        compress(&mut state, block);
    }
    state.to_output()
}

/// SM3 digest of an in-memory message.
pub fn hash_bytes(input: &[u8]) -> Result<Output, Error> {
    let padded = pad(input)?;
    Ok(digest_padded(&padded))
}

/// SM3 hasher usable through the [`digest::Digest`] trait.
///
/// Input is collected and hashed in one pass when the result is requested.
#[derive(Clone, Default)]
pub struct Sm3 {
    message: Vec<u8>,
}

impl Sm3 {
    /// Fallible counterpart of [`FixedOutput::fixed_result`].
    pub fn try_finalize(self) -> Result<Output, Error> {
        let padded = pad_owned(self.message)?;
        Ok(digest_padded(&padded))
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.message.extend_from_slice(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    /// # Panics
    ///
    /// If the padded message cannot be allocated. Use [`Sm3::try_finalize`]
    /// to handle that case.
    fn fixed_result(self) -> Output {
        self.try_finalize()
            .unwrap_or_else(|err| panic!("sm3: {}", err))
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.message.clear();
    }
}
