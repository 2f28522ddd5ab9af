//! This file provides some common functions
//! such as weight normalization and weighted sampling.

use rand::Rng;


/// Normalize the given slice so that it sums to one.
/// Does nothing when the total mass is not positive.
#[inline(always)]
pub(crate) fn normalize(weights: &mut [f64]) {
    let total = weights.iter().sum::<f64>();
    if total <= 0f64 {
        return;
    }
    weights.iter_mut().for_each(|w| *w /= total);
}


/// Returns the value with maximal total weight.
/// Ties are broken by keeping the value that appears first in `values`,
/// so the result is deterministic.
/// Returns `None` when `values` is empty.
///
/// ```
/// use minilearn::common::utils::weighted_mode;
/// let values = ['a', 'b', 'b', 'a', 'a'];
/// let weights = [1.0, 2.0, 3.0, 1.0, 2.0];
/// assert_eq!(weighted_mode(&values, &weights), Some('b'));
/// ```
#[inline]
pub fn weighted_mode<T>(values: &[T], weights: &[f64]) -> Option<T>
    where T: Clone + PartialEq,
{
    assert_eq!(values.len(), weights.len());

    // Accumulate weights per distinct value,
    // preserving first-appearance order.
    let mut totals: Vec<(&T, f64)> = Vec::new();
    for (v, w) in values.iter().zip(weights) {
        match totals.iter_mut().find(|(u, _)| *u == v) {
            Some((_, total)) => { *total += w; },
            None => { totals.push((v, *w)); },
        }
    }

    let mut best: Option<(&T, f64)> = None;
    for (v, total) in totals {
        match best {
            Some((_, b)) if total <= b => {},
            _ => { best = Some((v, total)); },
        }
    }

    best.map(|(v, _)| v.clone())
}


/// Draw `n` values with replacement,
/// each value picked with probability proportional to its weight.
#[inline]
pub fn weighted_sample_with_replacement<T, R>(
    values: &[T],
    weights: &[f64],
    n: usize,
    rng: &mut R,
) -> Vec<T>
    where T: Clone,
          R: Rng,
{
    assert_eq!(values.len(), weights.len());

    let cumulative = weights.iter()
        .scan(0f64, |acc, w| {
            *acc += w;
            Some(*acc)
        })
        .collect::<Vec<_>>();

    let total = cumulative.last().copied().unwrap_or(0f64);
    if total <= 0f64 || n == 0 {
        return Vec::new();
    }

    (0..n).map(|_| {
            let r = rng.gen::<f64>() * total;
            let k = cumulative.partition_point(|&c| c <= r)
                .min(values.len() - 1);
            values[k].clone()
        })
        .collect()
}


/// Return `n` values replicated in proportion to `weights`.
/// Each value first receives `floor(w * n / total)` copies,
/// in the order the values are given;
/// the remaining slots are filled by weighted sampling
/// over the fractional parts.
/// When every share is integral the result does not depend on `rng`:
///
/// ```
/// use rand::SeedableRng;
/// use minilearn::common::utils::weighted_replicate;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let vs = weighted_replicate(&['A', 'B', 'C'], &[1.0, 2.0, 1.0], 4, &mut rng);
/// assert_eq!(vs, vec!['A', 'B', 'B', 'C']);
/// ```
#[inline]
pub fn weighted_replicate<T, R>(
    values: &[T],
    weights: &[f64],
    n: usize,
    rng: &mut R,
) -> Vec<T>
    where T: Clone,
          R: Rng,
{
    assert_eq!(values.len(), weights.len());

    let total = weights.iter().sum::<f64>();
    if total <= 0f64 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(n);
    let mut fractions = Vec::with_capacity(values.len());
    for (v, w) in values.iter().zip(weights) {
        let share = w * n as f64 / total;
        let whole = share.floor() as usize;
        result.extend(std::iter::repeat(v.clone()).take(whole));
        fractions.push(share - share.floor());
    }

    let rest = n - result.len();
    result.extend(
        weighted_sample_with_replacement(values, &fractions[..], rest, rng)
    );

    result
}
