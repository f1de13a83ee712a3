//! Group operations on 16-bit words.
//!
//! IDEA mixes three incompatible groups on the same 16-bit words:
//! bitwise XOR, addition modulo 2^16 and multiplication modulo 2^16 + 1.
//! In the multiplicative group the word `0` stands for 2^16, so every
//! word has an inverse and the mapping stays a permutation of `u16`.

use crate::Word16;

/// Modulus of the additive group (2^16).
pub const ADD_MODULUS: u32 = 1 << 16;

/// Modulus of the multiplicative group (2^16 + 1, a Fermat prime).
pub const MUL_MODULUS: u32 = ADD_MODULUS + 1;

/// Bitwise exclusive-or of two words.
#[inline(always)]
pub const fn xor(a: Word16, b: Word16) -> Word16 {
    a ^ b
}

/// Addition modulo 2^16.
#[inline(always)]
pub const fn mod_add(a: Word16, b: Word16) -> Word16 {
    a.wrapping_add(b)
}

/// Additive inverse modulo 2^16.
///
/// `0` maps to `0`, never to 2^16.
#[inline(always)]
pub const fn mod_add_inverse(a: Word16) -> Word16 {
    0u16.wrapping_sub(a)
}

/// Multiplication modulo 2^16 + 1.
///
/// An operand of `0` is read as 2^16 and a product of 2^16 is written
/// back as `0`.
#[inline]
pub const fn mod_mul(a: Word16, b: Word16) -> Word16 {
    let a = widen(a) as u64;
    let b = widen(b) as u64;

    // 2^16 * 2^16 does not fit in u32.
    let product = (a * b) % MUL_MODULUS as u64;

    narrow(product as u32)
}

/// Multiplicative inverse modulo 2^16 + 1.
///
/// `0` (2^16) is its own inverse, so `mod_mul_inverse(0) == 0`.
#[inline]
pub fn mod_mul_inverse(a: Word16) -> Word16 {
    // Every element of 1..=2^16 is coprime with the prime modulus.
    inverse_mod(widen(a) as i64, MUL_MODULUS as i64).map_or(0, |inverse| narrow(inverse as u32))
}

/// Inverse of `value` modulo `modulus` via the extended Euclidean algorithm.
///
/// Returns `Some(0)` when `modulus == 1`, and otherwise the inverse in
/// `[0, modulus)`.
///
/// Returns `None` if `modulus < 1`, `value <= 0`, or `value` and `modulus`
/// share a factor.
pub fn inverse_mod(value: i64, modulus: i64) -> Option<i64> {
    if modulus < 1 || value <= 0 {
        return None;
    }

    if modulus == 1 {
        return Some(0);
    }

    let (mut r, mut next_r) = (value % modulus, modulus);
    let (mut x, mut next_x) = (1i64, 0i64);

    while next_r != 0 {
        let quotient = r / next_r;

        (r, next_r) = (next_r, r - quotient * next_r);
        (x, next_x) = (next_x, x - quotient * next_x);
    }

    // r is now gcd(value, modulus)
    if r != 1 {
        return None;
    }

    Some(x.rem_euclid(modulus))
}

/// Reads a word as an element of the multiplicative group.
#[inline(always)]
const fn widen(word: Word16) -> u32 {
    if word == 0 { ADD_MODULUS } else { word as u32 }
}

/// Writes a multiplicative group element back as a word.
#[inline(always)]
const fn narrow(value: u32) -> Word16 {
    // 2^16 truncates to 0.
    value as Word16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_is_self_inverse() {
        const A: Word16 = 0b1010_1100_0011_0101;
        const B: Word16 = 0b0110_0110_1111_0000;

        // XOR twice with the same operand restores the original word
        assert_eq!(xor(xor(A, B), B), A);
        assert_eq!(xor(A, A), 0, "A word XOR itself must be zero");
    }

    #[test]
    fn test_mod_add_wraps_at_two_to_the_sixteen() {
        assert_eq!(mod_add(0xFFFF, 1), 0);
        assert_eq!(mod_add(0xFFFF, 0xFFFF), 0xFFFE);
        assert_eq!(mod_add(0x1234, 0x0001), 0x1235);
    }

    #[test]
    fn test_mod_add_inverse_of_zero_is_zero() {
        // 2^16 mod 2^16 must be reported as 0, not as a 17-bit value
        assert_eq!(mod_add_inverse(0), 0);
        assert_eq!(mod_add_inverse(1), 0xFFFF);
    }

    #[test]
    fn test_mod_add_inverse_identity_for_every_word() {
        for x in 0..=Word16::MAX {
            assert_eq!(
                mod_add(x, mod_add_inverse(x)),
                0,
                "x + (-x) must be 0 for x = {x:#06X}"
            );
        }
    }

    #[test]
    fn test_mod_mul_treats_zero_as_two_to_the_sixteen() {
        // 2^16 * 1 = 2^16, written back as 0
        assert_eq!(mod_mul(0, 1), 0);

        // 2^16 * 2^16 = (-1) * (-1) = 1 (mod 2^16 + 1)
        assert_eq!(mod_mul(0, 0), 1);

        // 2^15 * 2 = 2^16, written back as 0
        assert_eq!(mod_mul(0x8000, 2), 0);

        // 2^16 * 2 = -2 = 65535 (mod 2^16 + 1)
        assert_eq!(mod_mul(0, 2), 0xFFFF);
    }

    #[test]
    fn test_mod_mul_small_products_are_unchanged() {
        assert_eq!(mod_mul(3, 7), 21);
        assert_eq!(mod_mul(1, 0xABCD), 0xABCD);
    }

    #[test]
    fn test_mod_mul_inverse_edge_words() {
        assert_eq!(mod_mul_inverse(0), 0, "2^16 is its own inverse");
        assert_eq!(mod_mul_inverse(1), 1);
        assert_eq!(mod_mul_inverse(2), 32_769);
        assert_eq!(mod_mul_inverse(3), 21_846);
    }

    #[test]
    fn test_mod_mul_inverse_identity_for_every_word() {
        for x in 0..=Word16::MAX {
            assert_eq!(
                mod_mul(x, mod_mul_inverse(x)),
                1,
                "x * x^-1 must be 1 for x = {x:#06X}"
            );
        }
    }

    #[test]
    fn test_inverse_mod_with_unit_modulus_is_zero() {
        assert_eq!(inverse_mod(12345, 1), Some(0));
    }

    #[test]
    fn test_inverse_mod_small_prime() {
        // 3 * 5 = 15 = 1 (mod 7)
        assert_eq!(inverse_mod(3, 7), Some(5));

        // Negative intermediate coefficients are lifted into [0, m)
        assert_eq!(inverse_mod(5, 7), Some(3));

        // Values above the modulus are reduced first: 10 = 3 (mod 7)
        assert_eq!(inverse_mod(10, 7), Some(5));
    }

    #[test]
    fn test_inverse_mod_without_inverse_is_none() {
        // Zero has no inverse in any ring
        assert_eq!(inverse_mod(0, 7), None);
        assert_eq!(inverse_mod(-3, 7), None, "Negative values are rejected");

        // gcd(2, 4) = 2, so 2 is not invertible modulo 4
        assert_eq!(inverse_mod(2, 4), None);
        assert_eq!(inverse_mod(14, 7), None);

        // Degenerate moduli must not divide by zero
        assert_eq!(inverse_mod(5, 0), None);
        assert_eq!(inverse_mod(5, -7), None);
    }
}
