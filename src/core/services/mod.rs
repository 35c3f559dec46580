//! Pure services for reference extraction
//!
//! Nothing in here touches the filesystem.

pub mod extractor;
pub mod names;
pub mod patterns;
pub mod sections;

pub use extractor::extract_references;
pub use names::NameFilter;
pub use patterns::pattern;
pub use sections::{AGENT_SECTIONS, SKILL_SECTIONS, SectionMatcher, SectionSpec};
