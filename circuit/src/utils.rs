//! Bit-level helpers shared by boolean circuits and their witnesses.

use alloc::vec::Vec;

use p3_field::{Field, PrimeCharacteristicRing};

/// Computes the arithmetic generalization of boolean `xor`.
///
/// For boolean inputs, `x ^ y = x + y - 2xy`.
#[inline(always)]
pub fn xor<R: PrimeCharacteristicRing>(x: R, y: R) -> R {
    x.clone() + y.clone() - x * y.double()
}

#[inline]
pub fn is_bool<F: Field>(x: F) -> bool {
    x == F::ZERO || x == F::ONE
}

/// Expand bytes into bits, least significant bit of each byte first.
pub fn bytes_to_bits_le(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

/// Pack bits into bytes, least significant bit of each byte first.
///
/// A trailing partial byte is zero-extended.
pub fn bits_le_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i))
        })
        .collect()
}
