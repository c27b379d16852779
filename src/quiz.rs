use rand::Rng;

use crate::db::Question;

/// Draws a question from `pool` that is not in `previous` yet, uniform among
/// the unserved ones. `None` signals exhaustion and is an expected end
/// state, not an error.
///
/// Rejection sampling: draw a uniform index over the whole pool and redraw
/// while the pick was already served. The up-front exhaustion check leaves
/// at least one unserved question, so the loop terminates.
pub fn next_question<'a, R: Rng>(
    pool: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    if pool.is_empty() || pool.len() == previous.len() {
        return None;
    }
    loop {
        let pick = &pool[rng.gen_range(0..pool.len())];
        if !previous.contains(&pick.id) {
            return Some(pick);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("Q{id}?"),
                answer: format!("A{id}"),
                difficulty: 1,
                category: 1,
            })
            .collect()
    }

    #[test]
    fn never_repeats_within_one_history() {
        let pool = pool(&[1, 2, 3, 4, 5]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = Vec::new();
        for _ in 0..pool.len() {
            let picked = next_question(&pool, &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
            previous.push(picked.id);
        }
        assert_eq!(previous.len(), pool.len());
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let pool = pool(&[1, 2]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(next_question(&pool, &[1, 2], &mut rng).is_none());
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(next_question(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn last_unserved_question_is_always_found() {
        let pool = pool(&[10, 20, 30]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = next_question(&pool, &[10, 30], &mut rng).unwrap();
            assert_eq!(picked.id, 20);
        }
    }
}
