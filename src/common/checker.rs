//! This file defines some functions that check pre-conditions.
//! E.g., shape of the training sample.

use crate::Sample;


const SIMPLEX_TOLERANCE: f64 = 1e-5;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "The sample has no examples");
    assert!(n_feature > 0, "The sample has no features");
    assert_eq!(
        n_sample,
        sample.target().len(),
        "The target column is not specified. \
         Use `SampleReader::target_feature(\"Column Name\")`.",
    );
}


/// Check whether `dist` is a probability vector over the sample.
#[inline(always)]
pub(crate) fn check_distribution(sample: &Sample, dist: &[f64]) {
    let n_sample = sample.shape().0;
    assert_eq!(
        n_sample,
        dist.len(),
        "The distribution length differs from the number of examples",
    );
    assert!(
        dist.iter().all(|d| *d >= 0f64),
        "The distribution has a negative entry",
    );

    let sum = dist.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(dist[..]) = {sum}, expected 1",
    );
}
