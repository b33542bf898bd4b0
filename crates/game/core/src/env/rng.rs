//! Selector oracle for deterministic random region selection.
//!
//! Every draw is a pure function of a seed. The seed itself is derived from
//! the round seed stored in [`GameState`](crate::state::GameState) and a draw
//! counter, so replaying the same actions against the same initial state
//! always produces the same targets.

/// Picks elements out of non-empty sequences of region names.
///
/// Implementations must be deterministic for a given seed. Tests substitute
/// [`ScriptedSelector`] to fix the order in which targets appear.
pub trait SelectorOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Returns an index into `names`, uniformly distributed by default.
    ///
    /// `names` must be non-empty; calling this on an empty slice is a caller bug.
    fn pick(&self, seed: u64, names: &[String]) -> usize {
        debug_assert!(!names.is_empty(), "pick requires a non-empty sequence");
        (self.next_u32(seed) as usize) % names.len()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR output permutation over one LCG step of the seed:
/// 32-bit output from 64-bit state, no branches, same seed always yields the
/// same value.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgSelector;

impl PcgSelector {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR: xorshift high bits, then rotate by the top five bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl SelectorOracle for PcgSelector {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Deterministic stub that always prefers names from a fixed script.
///
/// `pick` returns the first scripted name that is still among the candidates,
/// falling back to the first candidate. With a script of `["A", "B"]` and a
/// round of `A, B`, the targets appear as `A` then `B`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedSelector {
    script: Vec<String>,
}

impl ScriptedSelector {
    pub fn new<I, N>(script: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
        }
    }

    /// Selector that always takes the first candidate.
    pub fn first() -> Self {
        Self::default()
    }
}

impl SelectorOracle for ScriptedSelector {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn pick(&self, _seed: u64, names: &[String]) -> usize {
        debug_assert!(!names.is_empty(), "pick requires a non-empty sequence");
        self.script
            .iter()
            .find_map(|wanted| names.iter().position(|name| name == wanted))
            .unwrap_or(0)
    }
}

/// Seed context for target draws.
pub(crate) const CONTEXT_TARGET: u32 = 0;
/// Seed context for Quick-mode subset shuffles.
pub(crate) const CONTEXT_SHUFFLE: u32 = 1;
/// Seed context for deriving the seed of the next round.
pub(crate) const CONTEXT_RESEED: u32 = 2;

/// Shuffles `names` in place with a Fisher-Yates walk driven by `selector`.
///
/// Step `i` picks among `names[i..]`, each with its own derived seed.
pub fn shuffle<S>(selector: &S, seed: u64, names: &mut [String])
where
    S: SelectorOracle + ?Sized,
{
    let len = names.len();
    for i in 0..len.saturating_sub(1) {
        let step_seed = compute_seed(seed, i as u64, CONTEXT_SHUFFLE);
        let offset = selector.pick(step_seed, &names[i..]);
        names.swap(i, i + offset);
    }
}

/// Compute deterministic seed from round state components.
///
/// * `round_seed` - Seed fixed when the round was created
/// * `nonce` - Draw counter (increments with every random draw)
/// * `context` - Distinguishes independent draws made at the same nonce
pub fn compute_seed(round_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style multipliers
    let mut hash = round_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
