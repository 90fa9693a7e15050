//! Integer avalanche hash shared by every seed input.
//!
//! The constants are fixed: two clients only agree on a level if they mix
//! with exactly the same function.

const MIX_MULTIPLIER: u32 = 0x045d_9f3b;

/// Spreads the bits of `x` over the whole 32-bit word.
pub fn mix(x: u32) -> u32 {
    let mut x = ((x >> 16) ^ x).wrapping_mul(MIX_MULTIPLIER);
    x = ((x >> 16) ^ x).wrapping_mul(MIX_MULTIPLIER);
    (x >> 16) ^ x
}

/// Mixes a signed game value by its two's complement bit pattern.
pub fn mix_signed(x: i32) -> u32 {
    mix(x as u32)
}

/// Folds the high half of a session id onto the low half.
pub fn fold_session_id(session_id: u64) -> u32 {
    ((session_id >> 32) ^ session_id) as u32
}
