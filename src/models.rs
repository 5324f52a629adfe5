// Submodules.
pub mod index;
pub mod normalize;
pub mod ped;
pub mod postings;
pub mod qgrams;
pub mod ranking;
pub mod record;
pub mod stats;
pub mod tsv;
pub mod types;
