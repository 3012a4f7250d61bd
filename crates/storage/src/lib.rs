//! Persistence adapters for learner progress.

pub mod json;
pub mod repository;
