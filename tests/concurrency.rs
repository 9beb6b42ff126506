//! One shared sampler, many trees drawn in parallel.

use ensemble_sampling::core::utils::random::tree_rng;
use ensemble_sampling::*;
use rayon::prelude::*;

mod common;
use common::*;

#[test]
fn test_parallel_draws_match_sequential_draws() {
    init_logging();
    let target = skewed_target();
    let config = SamplingConfig {
        mode: RowSamplingMode::Stratified,
        data_fraction: 0.5,
        draw_with_replacement: true,
        seed: 2024,
    };
    let sampler = RowSamplerFactory::create_from_config(&target, &config).unwrap();

    let parallel: Vec<RowSample> = (0..64)
        .into_par_iter()
        .map(|tree| {
            let mut rng = tree_rng(config.seed, tree);
            sampler.create_row_sample(&mut rng).unwrap()
        })
        .collect();

    let sequential: Vec<RowSample> = (0..64)
        .map(|tree| {
            let mut rng = tree_rng(config.seed, tree);
            sampler.create_row_sample(&mut rng).unwrap()
        })
        .collect();

    assert_eq!(parallel, sequential);
    for sample in &parallel {
        assert_eq!(draws_per_class(sample, &[120, 30, 7]), vec![60, 15, 4]);
    }
}

#[test]
fn test_sampler_is_shareable() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn RowSampler>();
    assert_send_sync::<NoReplacementSelector>();
    assert_send_sync::<WithReplacementSelector>();
}
