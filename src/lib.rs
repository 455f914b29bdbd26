pub mod api;
pub mod catalog;
pub mod delay;
pub mod envelope;
pub mod error;
pub mod generators;
pub mod rng;
pub mod upstream;
