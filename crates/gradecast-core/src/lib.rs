//! gradecast-core: Score estimation engine, regression trainer, and continuous learning.
//!
//! This crate defines the session data model, the required-score calculator,
//! the per-assessment regression models, and the engine that ties them to a
//! pluggable training store.

pub mod engine;
pub mod error;
pub mod learning;
pub mod model;
pub mod parser;
pub mod predictor;
pub mod regression;
pub mod report;
pub mod required;
pub mod seed;
pub mod trainer;
pub mod traits;
