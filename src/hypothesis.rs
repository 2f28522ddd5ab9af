//! The core library for `Classifier` and the combined hypotheses.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_majority;
pub(crate) mod majority_vote;


pub use hypothesis_traits::Classifier;
pub use weighted_majority::WeightedMajority;
pub use majority_vote::MajorityVote;
