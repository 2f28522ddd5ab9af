//! Defines [`Sample`], a batch of training examples.

use std::collections::HashMap;
use std::ops::Index;

use crate::Error;
use super::feature::Feature;


/// Struct `Sample` holds a batch sample in column-major order.
/// The target column is kept separately from the features;
/// its values are class labels encoded as `f64`
/// (for non-numeric targets, codes in first-appearance order).
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) classes: Vec<String>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    pub(super) fn from_features(
        features: Vec<Feature>,
        target: Vec<f64>,
        classes: Vec<String>,
    ) -> Self
    {
        let n_sample = features.first().map(Feature::len).unwrap_or(0);
        let n_feature = features.len();
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self {
            name_to_index,
            features,
            target,
            classes,
            n_sample,
            n_feature,
        }
    }


    /// Returns the pair of the number of examples
    /// and the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the target labels as a slice of type `f64`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `idx`-th example `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the class names in label order.
    /// Empty when the target column was numeric.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the name of the class encoded as `label`, if any.
    pub fn class_name(&self, label: i64) -> Option<&str> {
        usize::try_from(label)
            .ok()
            .and_then(|k| self.classes.get(k))
            .map(String::as_str)
    }


    /// Returns the label the given class name is encoded as.
    pub fn label_of<S: AsRef<str>>(&self, name: S) -> Option<i64> {
        let name = name.as_ref();
        self.classes.iter()
            .position(|c| c == name)
            .map(|k| k as i64)
    }


    /// Re-encode the target labels so that `order[i]` becomes label `i`.
    /// Fails with [`Error::UnknownClass`] when a class
    /// present in the sample does not appear in `order`,
    /// or when the target column is numeric
    /// and thus interned no classes to re-encode.
    pub fn classes_to_numbers<S>(&mut self, order: &[S]) -> Result<(), Error>
        where S: AsRef<str>,
    {
        let remap = self.classes.iter()
            .map(|name| {
                order.iter()
                    .position(|o| o.as_ref() == name)
                    .map(|k| k as f64)
                    .ok_or_else(|| Error::UnknownClass(name.clone()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        // Validate every label before mutating anything.
        let target = self.target.iter()
            .map(|y| {
                remap.get(*y as usize)
                    .copied()
                    .ok_or_else(|| Error::UnknownClass(y.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        self.target = target;

        self.classes = order.iter()
            .map(|o| o.as_ref().to_string())
            .collect();

        Ok(())
    }


    /// Returns per-class means and sample standard deviations
    /// of every feature, keyed by class label.
    /// Categorical features are measured on their integer codes.
    /// A class seen only once gets zero deviation.
    pub fn find_means_and_deviations(
        &self,
    ) -> (HashMap<i64, Vec<f64>>, HashMap<i64, Vec<f64>>)
    {
        let mut rows_of_class: HashMap<i64, Vec<usize>> = HashMap::new();
        for (i, y) in self.target.iter().enumerate() {
            rows_of_class.entry(*y as i64).or_default().push(i);
        }

        let mut means = HashMap::new();
        let mut deviations = HashMap::new();
        for (label, rows) in rows_of_class {
            let n = rows.len() as f64;
            let mut mean = Vec::with_capacity(self.n_feature);
            let mut dev = Vec::with_capacity(self.n_feature);
            for feat in &self.features {
                let m = rows.iter().map(|&i| feat[i]).sum::<f64>() / n;
                let var = if rows.len() > 1 {
                    rows.iter()
                        .map(|&i| (feat[i] - m).powi(2))
                        .sum::<f64>()
                        / (n - 1f64)
                } else {
                    0f64
                };
                mean.push(m);
                dev.push(var.sqrt());
            }
            means.insert(label, mean);
            deviations.insert(label, dev);
        }

        (means, deviations)
    }


    /// Returns a new sample made of the listed rows, in that order.
    /// Rows may repeat, so this method also builds bootstrap copies.
    pub fn subsample(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.take_rows(indices))
            .collect::<Vec<_>>();

        let target = indices.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<f64>>();

        Self::from_features(features, target, self.classes.clone())
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>,
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .expect("The feature name does not exist");
        &self.features[k]
    }
}
