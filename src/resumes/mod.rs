//! # Resumes Module
//!
//! Resume intake: multipart PDF upload, text extraction, and the rule-based
//! parsers that pull skills, education and experience lines out of the
//! extracted text.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod routes;

#[cfg(test)]
mod tests;

pub use models::Resume;
pub use routes::resumes_routes;
