//! This file defines `AdaBoost` based on the paper
//! ``A Decision-Theoretic Generalization of On-Line Learning
//! and an Application to Boosting''
//! by Yoav Freund and Robert E. Schapire,
//! in its multiclass (AdaBoost.M1) form.

use crate::{
    Sample,
    Booster,
    WeakLearner,

    Classifier,
    WeightedMajority,
};
use crate::common::{checker, utils};

use std::ops::ControlFlow;


/// The AdaBoost algorithm
/// proposed by Robert E. Schapire and Yoav Freund.
///
/// `AdaBoost` maintains a distribution over the training examples.
/// Each round it asks the weak learner for a hypothesis,
/// measures its error under the current distribution,
/// and re-weights the examples so that the mistakes of that hypothesis
/// gain mass for the next round.
/// The final hypothesis is the weighted majority vote
/// of the collected hypotheses.
///
/// A round whose hypothesis is no better than chance
/// (weighted error at least `1/2`) stops the process
/// and the hypothesis is discarded.
/// A perfect round (weighted error zero) also stops the process;
/// that single hypothesis then makes up the whole vote.
///
/// # Example
/// The following code shows a small example for running [`AdaBoost`].
///
/// ```no_run
/// use minilearn::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Initialize `AdaBoost` and run it for 50 rounds.
/// let mut booster = AdaBoost::init(&sample)
///     .n_rounds(50);
///
/// // Set the weak learner with setting parameters.
/// let weak_learner = DecisionTreeBuilder::new(&sample)
///     .max_depth(1)
///     .build();
///
/// // Run `AdaBoost` and obtain the resulting hypothesis `f`.
/// let f = booster.run(&weak_learner);
///
/// // Get the predictions on the training set.
/// let predictions = f.predict_all(&sample).unwrap();
/// ```
pub struct AdaBoost<'a, F> {
    // Training sample
    sample: &'a Sample,

    // Distribution over examples
    dist: Vec<f64>,

    // Number of boosting rounds
    n_rounds: usize,

    // Weights on hypotheses
    weights: Vec<f64>,

    // Hypotheses obtained by the weak learner
    hypotheses: Vec<F>,

    // Terminated iteration.
    terminated: usize,
}


impl<'a, F> AdaBoost<'a, F> {
    /// Constructs a new instance of `AdaBoost`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,

            dist: Vec::new(),

            n_rounds: 100,

            weights: Vec::new(),
            hypotheses: Vec::new(),

            terminated: usize::MAX,
        }
    }


    /// Set the number of boosting rounds.
    #[inline(always)]
    pub fn n_rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;

        self
    }


    /// Returns the iteration at which the process stopped,
    /// or the round limit when every round completed.
    pub fn terminated(&self) -> usize {
        self.terminated
    }
}


impl<F> Booster<F> for AdaBoost<'_, F>
    where F: Classifier + Clone,
{
    fn preprocess<W>(
        &mut self,
        _weak_learner: &W,
    )
        where W: WeakLearner<Hypothesis = F>
    {
        checker::check_sample(self.sample);

        let n_sample = self.sample.shape().0;
        let uni = 1f64 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.weights = Vec::new();
        self.hypotheses = Vec::new();

        self.terminated = self.n_rounds;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = F>
    {
        if self.n_rounds < iteration {
            return ControlFlow::Break(self.n_rounds);
        }


        // Call weak learner to obtain a hypothesis.
        let h = weak_learner.produce(self.sample, &self.dist[..]);


        let predictions = h.predict_all(self.sample)
            .expect("A produced hypothesis rejected its training sample");

        let mistakes = self.sample.target()
            .iter()
            .zip(&predictions[..])
            .map(|(&y, &p)| y as i64 != p)
            .collect::<Vec<_>>();


        // Weighted error of the new hypothesis.
        let epsilon = self.dist.iter()
            .zip(&mistakes[..])
            .filter_map(|(d, &miss)| miss.then_some(*d))
            .sum::<f64>();


        // A perfect hypothesis makes the whole vote on its own.
        if epsilon <= 0f64 {
            self.weights = vec![1f64];
            self.hypotheses = vec![h];
            self.terminated = iteration;
            return ControlFlow::Break(iteration);
        }


        // A hypothesis no better than chance is discarded
        // and stops the process.
        if epsilon >= 0.5f64 {
            self.terminated = iteration - 1;
            return ControlFlow::Break(iteration);
        }


        let alpha = 0.5f64 * ((1f64 - epsilon) / epsilon).ln();


        // Update the distribution:
        // mistakes gain mass, correct predictions lose it.
        self.dist.iter_mut()
            .zip(&mistakes[..])
            .for_each(|(d, &miss)| {
                *d *= if miss { alpha.exp() } else { (-alpha).exp() };
            });
        utils::normalize(&mut self.dist[..]);


        self.weights.push(alpha);
        self.hypotheses.push(h);

        ControlFlow::Continue(())
    }


    fn postprocess<W>(
        &mut self,
        _weak_learner: &W,
    ) -> WeightedMajority<F>
        where W: WeakLearner<Hypothesis = F>
    {
        WeightedMajority::from_slices(&self.weights[..], &self.hypotheses[..])
    }
}
