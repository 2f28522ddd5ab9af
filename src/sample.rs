//! Defines the sample (dataset) abstraction and its reader.

mod feature;
mod sample_struct;
mod sample_reader;


pub use feature::Feature;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
