use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::{Classifier, Error};
use crate::common::utils;


/// A weighted-vote ensemble,
/// the hypothesis the boosting algorithms in this library return.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H: Clone> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from the given slices.
    /// Hypotheses with non-positive weight are dropped
    /// and the remaining weights are normalized.
    #[inline]
    pub fn from_slices(weights: &[f64], hypotheses: &[H]) -> Self {
        let mut new_weights = Vec::with_capacity(weights.len());
        let mut new_hypotheses = Vec::with_capacity(hypotheses.len());

        weights.iter()
            .copied()
            .zip(hypotheses)
            .for_each(|(w, h)| {
                if w > 0f64 {
                    new_weights.push(w);
                    new_hypotheses.push(h.clone());
                }
            });
        utils::normalize(&mut new_weights[..]);

        Self { weights: new_weights, hypotheses: new_hypotheses, }
    }
}


impl<H> WeightedMajority<H> {
    /// Returns the number of hypotheses voting.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` when no hypothesis is voting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    /// The label with the largest accumulated weight wins;
    /// equal totals go to the lowest label.
    /// Fails with [`Error::EmptyEnsemble`] when no hypothesis is voting.
    fn predict(&self, x: &[f64]) -> Result<i64, Error> {
        if self.hypotheses.is_empty() {
            return Err(Error::EmptyEnsemble);
        }

        let mut votes = BTreeMap::new();
        for (w, h) in self.weights.iter().zip(&self.hypotheses[..]) {
            let label = h.predict(x)?;
            *votes.entry(label).or_insert(0f64) += w;
        }

        let mut best: Option<(i64, f64)> = None;
        for (label, total) in votes {
            match best {
                Some((_, b)) if total <= b => {},
                _ => { best = Some((label, total)); },
            }
        }

        // `hypotheses` is non-empty, so `votes` is non-empty.
        Ok(best.map(|(label, _)| label).unwrap())
    }
}
