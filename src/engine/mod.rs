//! Skill matching engine module

pub mod analyzer;
pub mod comparison;
pub mod dictionary;
pub mod extraction;
pub mod progress;
pub mod scoring;
pub mod suggestions;
pub mod text;

pub use analyzer::{MatchReport, SkillMatchEngine};
pub use comparison::SkillComparison;
pub use dictionary::{SkillCategory, SkillDictionary};
pub use extraction::SkillExtraction;
