//! Grading helpers for fitted hypotheses,
//! used by the integration tests and example programs.

use crate::{Classifier, Error, Sample};


/// Returns the fraction of the given `(example, label)` pairs
/// that `h` classifies correctly.
/// Fails with [`Error::InvalidInput`] when an example has the wrong arity
/// and with [`Error::EmptyEnsemble`] when `h` is an empty ensemble.
#[inline]
pub fn grade<H>(h: &H, tests: &[(Vec<f64>, i64)]) -> Result<f64, Error>
    where H: Classifier,
{
    if tests.is_empty() {
        return Ok(0f64);
    }

    let mut n_correct = 0usize;
    for (x, y) in tests {
        if h.predict(x)? == *y {
            n_correct += 1;
        }
    }

    Ok(n_correct as f64 / tests.len() as f64)
}


/// Returns the fraction of examples in `sample`
/// that `h` classifies incorrectly.
#[inline]
pub fn error_ratio<H>(h: &H, sample: &Sample) -> Result<f64, Error>
    where H: Classifier,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 {
        return Ok(0f64);
    }

    let target = sample.target();
    let mut n_wrong = 0usize;
    for (i, y) in target.iter().enumerate() {
        let (x, _) = sample.at(i);
        if h.predict(&x)? != *y as i64 {
            n_wrong += 1;
        }
    }

    Ok(n_wrong as f64 / n_sample as f64)
}
