use log::debug;

use crate::{
    IDEA_NUM_ROUNDS, IDEA_NUM_SUBKEYS, Subkeys,
    arithmetic::{mod_add_inverse, mod_mul_inverse},
};

/// Derives the 52 decryption subkeys from the encryption subkeys.
///
/// Decryption runs the same round engine as encryption, so the
/// decryption sequence walks the encryption sequence backwards: each
/// emitted round takes the multiplicative and additive inverses of the
/// input-layer subkeys of one round, paired with the MA-structure subkeys
/// of the round before it. The two additive subkeys are swapped for every
/// emitted round except the first, which undoes the output transformation
/// and therefore sees them unswapped.
///
/// # Arguments
/// * `encryption` - Subkeys produced by [`expand_key`](crate::expand_key).
///
/// # Returns
/// The decryption [`Subkeys`].
pub fn invert_key(encryption: &Subkeys) -> Subkeys {
    let mut inverted = [0; IDEA_NUM_SUBKEYS];

    for (round, chunk) in inverted.chunks_exact_mut(6).enumerate() {
        let base = 46 - round * 6;

        // Only the first emitted round keeps the additive pair in place.
        let (first_add, second_add) = if round == 0 { (3, 4) } else { (4, 3) };

        chunk.copy_from_slice(&[
            mod_mul_inverse(encryption[base + 2]),
            mod_add_inverse(encryption[base + first_add]),
            mod_add_inverse(encryption[base + second_add]),
            mod_mul_inverse(encryption[base + 5]),
            encryption[base],
            encryption[base + 1],
        ]);
    }

    // Inverse of the first round's input layer closes the sequence.
    let output = IDEA_NUM_ROUNDS * 6;
    inverted[output..].copy_from_slice(&[
        mod_mul_inverse(encryption[0]),
        mod_add_inverse(encryption[1]),
        mod_add_inverse(encryption[2]),
        mod_mul_inverse(encryption[3]),
    ]);

    debug!("Derived {} decryption subkeys", inverted.len());

    Subkeys::new(inverted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MasterKey,
        arithmetic::{mod_add, mod_mul},
        expand_key,
    };

    fn sample_encryption_subkeys() -> Subkeys {
        expand_key(&MasterKey::from_bytes(*b"CAOHOCHUTECHCNTT"))
    }

    #[test]
    fn test_invert_key_first_round_undoes_output_transformation() {
        let encryption = sample_encryption_subkeys();
        let decryption = invert_key(&encryption);

        // Output transformation used subkeys 48..52 without swapping
        assert_eq!(mod_mul(encryption[48], decryption[0]), 1);
        assert_eq!(mod_add(encryption[49], decryption[1]), 0);
        assert_eq!(mod_add(encryption[50], decryption[2]), 0);
        assert_eq!(mod_mul(encryption[51], decryption[3]), 1);

        // MA-structure subkeys of the last full round are copied as-is
        assert_eq!(decryption[4], encryption[46]);
        assert_eq!(decryption[5], encryption[47]);
    }

    #[test]
    fn test_invert_key_middle_rounds_swap_additive_pair() {
        let encryption = sample_encryption_subkeys();
        let decryption = invert_key(&encryption);

        for round in 1..IDEA_NUM_ROUNDS {
            let base = 46 - round * 6;
            let emitted = decryption.round(round);

            assert_eq!(mod_mul(encryption[base + 2], emitted[0]), 1);
            assert_eq!(
                mod_add(encryption[base + 4], emitted[1]),
                0,
                "Round {round} must negate the second additive subkey first"
            );
            assert_eq!(
                mod_add(encryption[base + 3], emitted[2]),
                0,
                "Round {round} must negate the first additive subkey second"
            );
            assert_eq!(mod_mul(encryption[base + 5], emitted[3]), 1);
            assert_eq!(emitted[4], encryption[base]);
            assert_eq!(emitted[5], encryption[base + 1]);
        }
    }

    #[test]
    fn test_invert_key_tail_inverts_first_input_layer() {
        let encryption = sample_encryption_subkeys();
        let decryption = invert_key(&encryption);

        let [z48, z49, z50, z51] = decryption.output();
        assert_eq!(mod_mul(encryption[0], z48), 1);
        assert_eq!(mod_add(encryption[1], z49), 0);
        assert_eq!(mod_add(encryption[2], z50), 0);
        assert_eq!(mod_mul(encryption[3], z51), 1);
    }

    #[test]
    fn test_invert_key_known_values() {
        let decryption = invert_key(&sample_encryption_subkeys());

        assert_eq!(
            decryption.round(0),
            [0x14CB, 0x2F2E, 0xEAAB, 0x02B7, 0x0869, 0xCA8A]
        );
    }

    #[test]
    fn test_invert_key_maps_zero_subkeys_to_zero() {
        // An all-zero key schedule is its own inverse under IDEA's conventions
        let zero = Subkeys::new([0; IDEA_NUM_SUBKEYS]);

        assert_eq!(invert_key(&zero), zero);
    }
}
