//! Property tests: sampled indices are always in bounds and never land on
//! a zero-weight entry.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use muse_selection::sampler;

proptest! {
    #[test]
    fn prop_sampled_index_is_valid(
        weights in prop::collection::vec(0.0f64..10.0, 1..50),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        match sampler::sample_index(&mut rng, &weights) {
            Some(index) => {
                prop_assert!(index < weights.len());
                prop_assert!(weights[index] > 0.0);
            }
            None => {
                let total: f64 = weights.iter().sum();
                prop_assert!(total <= 0.0);
            }
        }
    }
}
