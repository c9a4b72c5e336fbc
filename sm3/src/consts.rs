pub const STATE_LEN: usize = 8;
pub const BLOCK_LEN: usize = 64;
pub const DIGEST_LEN: usize = 32;

/// Bytes taken by the big-endian bit-length field at the end of the padding.
pub const LENGTH_FIELD_LEN: usize = 8;

pub const IV: [u32; STATE_LEN] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

pub const T_0: u32 = 0x79cc_4519;
pub const T_1: u32 = 0x7a87_9d8a;

/// `T_j <<< (j mod 32)` for every round.
pub const T: [u32; 64] = round_constants();

const fn round_constants() -> [u32; 64] {
    let mut t = [0u32; 64];
    let mut j = 0;
    while j < 64 {
        let base = if j < 16 { T_0 } else { T_1 };
        t[j] = base.rotate_left((j % 32) as u32);
        j += 1;
    }
    t
}

pub const IPAD: u8 = 0x36;
pub const OPAD: u8 = 0x5c;
