//! Round selection: draw questions without replacement and shuffle each one's options.
//!
//! The random source is always passed in, so a seeded generator reproduces a round exactly.

use super::{ActiveQuizItem, QuizItem};
use rand::Rng;
use rand::seq::{SliceRandom, index};

/// Draws `k` distinct items from `pool` in random order and shuffles the options of each.
///
/// `pool` must hold at least `k` items; `ContentStore` rejects smaller pools at load time.
/// A short pool yields a short round rather than a panic.
pub fn select_round<R: Rng + ?Sized>(pool: &[QuizItem], k: usize, rng: &mut R) -> Vec<ActiveQuizItem> {
    debug_assert!(pool.len() >= k, "quiz pool smaller than round size");
    let amount = k.min(pool.len());

    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|idx| {
            let item = pool[idx].clone();
            let mut shuffled_options = item.options.clone();
            shuffled_options.shuffle(rng);
            ActiveQuizItem {
                item,
                shuffled_options,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_round_has_three_distinct_items() {
        let pool = builtin::quiz_pool();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = select_round(&pool, 3, &mut rng);

            assert_eq!(round.len(), 3);
            for i in 0..round.len() {
                for j in (i + 1)..round.len() {
                    assert_ne!(round[i].item.prompt, round[j].item.prompt);
                }
            }
        }
    }

    #[test]
    fn test_shuffled_options_are_permutation() {
        let pool = builtin::quiz_pool();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for active in select_round(&pool, 3, &mut rng) {
                let template = pool
                    .iter()
                    .find(|q| q.prompt == active.item.prompt)
                    .unwrap();

                assert_eq!(
                    sorted(active.shuffled_options.clone()),
                    sorted(template.options.clone())
                );
                assert_eq!(active.item.correct_answer, template.correct_answer);
                assert!(active.shuffled_options.contains(&active.item.correct_answer));
            }
        }
    }

    #[test]
    fn test_same_seed_same_round() {
        let pool = builtin::quiz_pool();
        let a = select_round(&pool, 3, &mut StdRng::seed_from_u64(7));
        let b = select_round(&pool, 3, &mut StdRng::seed_from_u64(7));

        let prompts = |r: &[ActiveQuizItem]| r.iter().map(|a| a.item.prompt.clone()).collect::<Vec<_>>();
        assert_eq!(prompts(&a), prompts(&b));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.shuffled_options, y.shuffled_options);
        }
    }

    #[test]
    fn test_every_item_gets_drawn_eventually() {
        let pool = builtin::quiz_pool();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            for active in select_round(&pool, 3, &mut rng) {
                seen.insert(active.item.prompt);
            }
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn test_pool_of_exactly_round_size() {
        let pool = builtin::quiz_pool();
        let mut rng = StdRng::seed_from_u64(1);
        let round = select_round(&pool[..3], 3, &mut rng);
        assert_eq!(round.len(), 3);
    }
}
