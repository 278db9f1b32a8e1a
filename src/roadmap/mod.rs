//! # Roadmap Module
//!
//! Turns a skill-gap report into a learning roadmap:
//! - `catalog` holds the hand-curated skill guide (videos, hours, project, certificate)
//! - `resolver` maps each missing skill to a curated or fallback card
//! - `render` serializes the roadmap to a display-ready HTML fragment
//!
//! Resolution is a pure synchronous transform: no I/O, no shared mutable
//! state, recomputed from scratch on every call.

pub mod catalog;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use catalog::{SkillGuideCatalog, SkillGuideEntry};
pub use render::render_roadmap;
pub use resolver::{resolve, RoadmapCard, RoadmapView};
