use byteorder::{ByteOrder, BE};

use crate::consts::{IV, STATE_LEN, T};
use crate::{Block, Output};

#[inline(always)]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Message schedule for one block: `W[0..68]` and `W'[0..64]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedWords {
    pub w: [u32; 68],
    pub w_prime: [u32; 64],
}

/// 5.3.2 Message Expansion
pub fn expand(block: &Block) -> ExpandedWords {
    let mut w = [0u32; 68];
    BE::read_u32_into(block.as_slice(), &mut w[..16]);
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w_prime = [0u32; 64];
    for (j, wp) in w_prime.iter_mut().enumerate() {
        *wp = w[j] ^ w[j + 4];
    }

    ExpandedWords { w, w_prime }
}

/// Chaining value `V(i)`, registers A through H.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState {
    words: [u32; STATE_LEN],
}

impl HashState {
    /// State loaded with the standard IV.
    pub fn init() -> HashState {
        HashState { words: IV }
    }

    pub fn words(&self) -> &[u32; STATE_LEN] {
        &self.words
    }

    /// Serializes the state big-endian, word 0 first.
    pub fn to_output(&self) -> Output {
        let mut out = Output::default();
        BE::write_u32_into(&self.words, out.as_mut_slice());
        out
    }
}

impl Default for HashState {
    fn default() -> Self {
        HashState::init()
    }
}

/// CF: compress function, `V(i+1) = CF(V(i), B(i))`
pub fn compress(state: &mut HashState, block: &Block) {
    let ExpandedWords { w, w_prime } = expand(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.words;

    for j in 0..64 {
        let a12 = a.rotate_left(12);
        let ss1 = a12.wrapping_add(e).wrapping_add(T[j]).rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w_prime[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    for (word, reg) in state.words.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word ^= reg;
    }
}
