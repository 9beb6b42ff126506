//! End-to-end row sampling scenarios through the factory.

use approx::assert_relative_eq;
use ensemble_sampling::core::utils::random::tree_rng;
use ensemble_sampling::*;

mod common;
use common::*;

#[test]
fn test_stratified_half_of_two_classes() {
    init_logging();
    let target = two_class_target();
    let sampler =
        RowSamplerFactory::create(&target, RowSamplingMode::Stratified, 0.5, false).unwrap();

    for tree in 0..20 {
        let mut rng = tree_rng(11, tree);
        let sample = sampler.create_row_sample(&mut rng).unwrap();

        assert_eq!(sample.nr_rows(), 10);
        assert_eq!(draws_in(&sample, 0, 6), 3);
        assert_eq!(draws_in(&sample, 6, 10), 2);
        assert_eq!(sample.nr_included(), 5);
        assert_relative_eq!(sample.fraction(), 0.5);
    }
}

#[test]
fn test_equal_size_full_fraction() {
    init_logging();
    let target = two_class_target();
    let sampler =
        RowSamplerFactory::create(&target, RowSamplingMode::EqualSize, 1.0, false).unwrap();

    let mut rng = tree_rng(5, 0);
    let sample = sampler.create_row_sample(&mut rng).unwrap();

    assert_eq!(draws_per_class(&sample, &[6, 4]), vec![4, 4]);
    assert_eq!(sample.nr_included(), 8);
    assert_relative_eq!(sample.fraction(), 0.8);
    // the minority class is taken whole
    assert!((6..10).all(|row| sample.is_included(row)));
}

#[test]
fn test_equal_size_on_skewed_classes() {
    init_logging();
    let target = skewed_target();
    let sampler =
        RowSamplerFactory::create(&target, RowSamplingMode::EqualSize, 0.6, false).unwrap();

    let mut rng = tree_rng(5, 1);
    let sample = sampler.create_row_sample(&mut rng).unwrap();

    // round(0.6 * 7) = 4 from every class
    assert_eq!(draws_per_class(&sample, &[120, 30, 7]), vec![4, 4, 4]);
    assert_relative_eq!(sample.fraction(), 12.0 / 157.0);
}

#[test]
fn test_default_fast_path_ignores_randomness() {
    init_logging();
    let target = TargetColumn::numeric(25);
    let sampler = RowSamplerFactory::create(&target, RowSamplingMode::Random, 1.0, false).unwrap();

    for tree in 0..5 {
        let mut rng = tree_rng(tree as u64, tree);
        let sample = sampler.create_row_sample(&mut rng).unwrap();
        assert_eq!(sample.nr_included(), 25);
        assert_eq!(sample.out_of_bag_rows().count(), 0);
        assert_eq!(sample.fraction(), 1.0);
    }
}

#[test]
fn test_bootstrap_over_regression_target() {
    init_logging();
    let target = TargetColumn::numeric(50);
    let sampler = RowSamplerFactory::create(&target, RowSamplingMode::Random, 1.0, true).unwrap();

    let mut rng = tree_rng(3, 0);
    let sample = sampler.create_row_sample(&mut rng).unwrap();

    assert_eq!(sample.nr_draws(), 50);
    assert_relative_eq!(sample.fraction(), 1.0);
    // included and out-of-bag rows partition the table
    assert_eq!(sample.nr_included() + sample.out_of_bag_rows().count(), 50);
    assert!(sample.nr_included() < 50);
    let weights = sample.weights();
    assert_relative_eq!(weights.iter().sum::<f64>(), 50.0);
}

#[test]
fn test_same_seed_same_sample() {
    let target = skewed_target();
    let sampler =
        RowSamplerFactory::create(&target, RowSamplingMode::Stratified, 0.3, true).unwrap();

    let first = sampler.create_row_sample(&mut tree_rng(99, 4)).unwrap();
    let second = sampler.create_row_sample(&mut tree_rng(99, 4)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stratified_on_numeric_target_fails_fast() {
    let target = TargetColumn::numeric(10);
    let err = RowSamplerFactory::create(&target, RowSamplingMode::Stratified, 0.5, false)
        .unwrap_err();
    assert_eq!(err.category(), "invalid_argument");
    assert!(!err.is_recoverable());
}

#[test]
fn test_target_from_labels_feeds_sampler() {
    let labels = [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 2, 2];
    let target = TargetColumn::from_sorted_labels(&labels).unwrap();
    assert_eq!(target.class_frequencies(), Some(&[4usize, 6, 2][..]));

    let sampler =
        RowSamplerFactory::create(&target, RowSamplingMode::EqualSize, 0.5, false).unwrap();
    let sample = sampler.create_row_sample(&mut tree_rng(1, 0)).unwrap();
    assert_eq!(draws_per_class(&sample, &[4, 6, 2]), vec![1, 1, 1]);
}
