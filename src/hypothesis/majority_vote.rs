use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::{Classifier, Error};


/// An unweighted plurality-vote ensemble:
/// every member hypothesis casts one vote
/// and the label with the most votes wins
/// (equal counts go to the lowest label).
/// This is the hypothesis the random forest returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorityVote<H> {
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> MajorityVote<H> {
    /// Construct a new `MajorityVote` from the given hypotheses.
    #[inline]
    pub fn from_hypotheses(hypotheses: Vec<H>) -> Self {
        Self { hypotheses }
    }


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


impl<H> Classifier for MajorityVote<H>
    where H: Classifier,
{
    /// Fails with [`Error::EmptyEnsemble`] when no hypothesis is voting.
    fn predict(&self, x: &[f64]) -> Result<i64, Error> {
        if self.hypotheses.is_empty() {
            return Err(Error::EmptyEnsemble);
        }

        let mut votes = BTreeMap::new();
        for h in &self.hypotheses {
            let label = h.predict(x)?;
            *votes.entry(label).or_insert(0usize) += 1;
        }

        let mut best: Option<(i64, usize)> = None;
        for (label, count) in votes {
            match best {
                Some((_, b)) if count <= b => {},
                _ => { best = Some((label, count)); },
            }
        }

        Ok(best.map(|(label, _)| label).unwrap())
    }
}
