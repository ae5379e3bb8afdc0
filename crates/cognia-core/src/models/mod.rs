pub mod classification;
pub mod index;
pub mod profile;
pub mod subtest;
pub mod thresholds;
