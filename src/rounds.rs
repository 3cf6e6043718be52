use crate::models::{Round, TranslationPair};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_ROUNDS: usize = 20;

/// Shuffle `pairs` and keep at most `max_rounds` of them, always asking for
/// the source-language word.
pub fn build_rounds_with_limit<R: Rng + ?Sized>(
    pairs: &[TranslationPair],
    max_rounds: usize,
    rng: &mut R,
) -> Vec<Round> {
    let mut shuffled: Vec<&TranslationPair> = pairs.iter().collect();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(max_rounds)
        .map(Round::from)
        .collect()
}

pub fn build_rounds<R: Rng + ?Sized>(pairs: &[TranslationPair], rng: &mut R) -> Vec<Round> {
    build_rounds_with_limit(pairs, MAX_ROUNDS, rng)
}
