use log::debug;

use crate::{
    Block, IDEA_NUM_ROUNDS, Subkeys, Word16,
    arithmetic::{mod_add, mod_mul, xor},
};

/// Every intermediate value of one full round.
///
/// Steps are numbered as in the classic fourteen-step description of
/// IDEA: `steps[0]` is step one, `steps[13]` is step fourteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrace {
    /// Block words entering the round.
    pub input: [Word16; 4],
    /// The six subkeys consumed by the round.
    pub subkeys: [Word16; 6],
    /// The fourteen step values.
    pub steps: [Word16; 14],
    /// Block words handed to the next round (or to the output transformation).
    pub output: [Word16; 4],
}

/// Receives the intermediate values of [`transform_observed`].
///
/// Both methods default to doing nothing. `()` is the no-op observer.
pub trait RoundObserver {
    /// Called once per full round, after the round is computed.
    ///
    /// `round` is 0-based.
    fn on_round(&mut self, round: usize, trace: &RoundTrace) {
        let _ = (round, trace);
    }

    /// Called once with the block produced by the output transformation.
    fn on_output(&mut self, block: &Block) {
        let _ = block;
    }
}

impl RoundObserver for () {}

/// Reports every round step through the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RoundObserver for LogObserver {
    fn on_round(&mut self, round: usize, trace: &RoundTrace) {
        let RoundTrace {
            input: [x0, x1, x2, x3],
            subkeys: [z0, z1, z2, z3, z4, z5],
            steps: s,
            output,
        } = *trace;

        debug!("Round {}:", round + 1);
        debug!("Step one: {x0:04X} * {z0:04X} = {:04X}", s[0]);
        debug!("Step two: {x1:04X} + {z1:04X} = {:04X}", s[1]);
        debug!("Step three: {x2:04X} + {z2:04X} = {:04X}", s[2]);
        debug!("Step four: {x3:04X} * {z3:04X} = {:04X}", s[3]);
        debug!("Step five: {:04X} ^ {:04X} = {:04X}", s[0], s[2], s[4]);
        debug!("Step six: {:04X} ^ {:04X} = {:04X}", s[1], s[3], s[5]);
        debug!("Step seven: {:04X} * {z4:04X} = {:04X}", s[4], s[6]);
        debug!("Step eight: {:04X} + {:04X} = {:04X}", s[5], s[6], s[7]);
        debug!("Step nine: {:04X} * {z5:04X} = {:04X}", s[7], s[8]);
        debug!("Step ten: {:04X} + {:04X} = {:04X}", s[6], s[8], s[9]);
        debug!("Step eleven: {:04X} ^ {:04X} = {:04X}", s[0], s[8], s[10]);
        debug!("Step twelve: {:04X} ^ {:04X} = {:04X}", s[2], s[8], s[11]);
        debug!("Step thirteen: {:04X} ^ {:04X} = {:04X}", s[1], s[9], s[12]);
        debug!("Step fourteen: {:04X} ^ {:04X} = {:04X}", s[3], s[9], s[13]);
        debug!("X: {output:04X?}");
    }

    fn on_output(&mut self, block: &Block) {
        debug!("Output transformation: {:04X?}", block.words());
    }
}

/// Runs one full round on `input` with the round's six subkeys.
///
/// On the last round the two middle outputs are not swapped.
fn full_round(input: [Word16; 4], z: [Word16; 6], last: bool) -> RoundTrace {
    let [x0, x1, x2, x3] = input;

    let one = mod_mul(x0, z[0]);
    let two = mod_add(x1, z[1]);
    let three = mod_add(x2, z[2]);
    let four = mod_mul(x3, z[3]);

    // MA-structure
    let five = xor(one, three);
    let six = xor(two, four);
    let seven = mod_mul(five, z[4]);
    let eight = mod_add(six, seven);
    let nine = mod_mul(eight, z[5]);
    let ten = mod_add(seven, nine);

    let eleven = xor(one, nine);
    let twelve = xor(three, nine);
    let thirteen = xor(two, ten);
    let fourteen = xor(four, ten);

    let output = if last {
        [eleven, thirteen, twelve, fourteen]
    } else {
        [eleven, twelve, thirteen, fourteen]
    };

    RoundTrace {
        input,
        subkeys: z,
        steps: [
            one, two, three, four, five, six, seven, eight, nine, ten, eleven, twelve, thirteen,
            fourteen,
        ],
        output,
    }
}

/// Applies 8 full rounds and the output transformation to `block`.
///
/// Encryption and decryption differ only in the `subkeys` supplied:
/// pass [`expand_key`](crate::expand_key) output to encrypt and
/// [`invert_key`](crate::invert_key) output to decrypt.
#[inline]
pub fn transform(block: Block, subkeys: &Subkeys) -> Block {
    transform_observed(block, subkeys, &mut ())
}

/// Same as [`transform`], reporting every round to `observer`.
pub fn transform_observed<O>(block: Block, subkeys: &Subkeys, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let mut state = block.words();

    for round in 0..IDEA_NUM_ROUNDS {
        let trace = full_round(state, subkeys.round(round), round == IDEA_NUM_ROUNDS - 1);
        observer.on_round(round, &trace);

        state = trace.output;
    }

    // Output transformation (half-round).
    let [x0, x1, x2, x3] = state;
    let [z48, z49, z50, z51] = subkeys.output();

    let result = Block::new([
        mod_mul(x0, z48),
        mod_add(x1, z49),
        mod_add(x2, z50),
        mod_mul(x3, z51),
    ]);

    observer.on_output(&result);

    result
}
