//! # Analysis Module
//!
//! Job-fit analysis: score a parsed resume against a catalog role or a
//! pasted job description, compute matched/missing skills, and generate the
//! short/medium/long-term recommendation report consumed by the roadmap
//! resolver.

pub mod handlers;
pub mod models;
pub mod recommendations;
pub mod routes;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use models::{AnalysisReport, Recommendations, ShortTermItem};
pub use routes::analysis_routes;
