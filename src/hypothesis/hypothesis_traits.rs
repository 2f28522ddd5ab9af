use crate::{Error, Sample};


/// A trait that defines the behavior of a classifier.
/// You only need to implement the `predict` method.
/// Labels are class codes of type `i64`;
/// [`Sample::class_name`] maps them back to class names.
pub trait Classifier {
    /// Predicts the label of the given example.
    /// Fails with [`Error::InvalidInput`]
    /// when `x` does not have the arity the model was trained on.
    fn predict(&self, x: &[f64]) -> Result<i64, Error>;


    /// Predicts the labels of every example in `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<i64>, Error> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|i| {
                let (x, _) = sample.at(i);
                self.predict(&x)
            })
            .collect()
    }
}
