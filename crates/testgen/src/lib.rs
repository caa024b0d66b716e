//! Random relation schemas for property tests and benchmarks.

pub mod generator;
