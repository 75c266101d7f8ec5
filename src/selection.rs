//! Random episode selection.
//!
//! Pure helpers over an injected RNG so the draw rules are testable without
//! touching application state.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw a uniformly random index in `0..len`, redrawing while the result
/// equals `excluding`. With fewer than two entries the exclusion is not
/// enforced; an empty range yields `None`.
pub fn pick_random(len: usize, excluding: Option<usize>, rng: &mut impl Rng) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    loop {
        let idx = rng.gen_range(0..len);
        if Some(idx) != excluding {
            return Some(idx);
        }
    }
}

/// Shuffled index order over `0..len`, used by the spin reel so the looping
/// placeholder shows the catalog in a fresh order every spin.
pub fn shuffled_indices(len: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_yields_none() {
        let mut rng = rand::thread_rng();
        assert_eq!(pick_random(0, None, &mut rng), None);
        assert_eq!(pick_random(0, Some(0), &mut rng), None);
    }

    #[test]
    fn single_episode_ignores_exclusion() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            assert_eq!(pick_random(1, Some(0), &mut rng), Some(0));
        }
    }

    #[test]
    fn never_repeats_excluded_index() {
        let mut rng = rand::thread_rng();
        for len in 2..6 {
            let mut previous = pick_random(len, None, &mut rng).unwrap();
            for _ in 0..500 {
                let next = pick_random(len, Some(previous), &mut rng).unwrap();
                assert_ne!(next, previous);
                assert!(next < len);
                previous = next;
            }
        }
    }

    #[test]
    fn covers_all_non_excluded_indices() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let idx = pick_random(5, Some(2), &mut rng).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true, true, false, true, true]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = rand::thread_rng();
        let mut indices = shuffled_indices(16, &mut rng);
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }
}
