//! Main engine combining extraction, comparison, scoring, and suggestions

use crate::config::{Config, ScoringConfig};
use crate::engine::comparison::{compare_skills, SkillComparison};
use crate::engine::dictionary::SkillDictionary;
use crate::engine::extraction::SkillExtractor;
use crate::engine::progress::{progress_stats, ProgressStats};
use crate::engine::scoring::calculate_match_rate;
use crate::engine::suggestions::{SuggestionAnalyzer, Tip};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coordinates the whole matching pipeline. Construction compiles the
/// dictionary into a matcher and can fail; `analyze` never does. All
/// methods take `&self`, so one engine can serve concurrent callers.
pub struct SkillMatchEngine {
    dictionary: SkillDictionary,
    extractor: SkillExtractor,
    suggestions: SuggestionAnalyzer,
    scoring: ScoringConfig,
}

/// Complete result of one analysis run. Immutable, serializes to the
/// camelCase report shape consumed by downstream tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Overall 0..100 match rate.
    pub match_rate: u8,
    pub skill_comparison: SkillComparison,
    pub recruiter_tips: Vec<Tip>,
    pub formatting_analysis: Vec<Tip>,
    pub progress_stats: ProgressStats,
    pub timestamp: DateTime<Utc>,
}

impl MatchReport {
    /// Sentinel returned when either input text is empty: zero score,
    /// a single error tip, and all-zero stats, so callers can render a
    /// consistent result without special-casing.
    pub fn empty() -> Self {
        Self {
            match_rate: 0,
            skill_comparison: SkillComparison::default(),
            recruiter_tips: vec![Tip::error(
                "No Data Available",
                "Please provide both resume and job description text for analysis.",
            )],
            formatting_analysis: Vec::new(),
            progress_stats: ProgressStats::default(),
            timestamp: Utc::now(),
        }
    }
}

impl SkillMatchEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = SkillDictionary::from_config(&config.dictionary)?;
        Self::with_dictionary(dictionary, config.scoring.clone())
    }

    /// Builds an engine around an explicit dictionary, validating both
    /// the dictionary and the scoring parameters.
    pub fn with_dictionary(dictionary: SkillDictionary, scoring: ScoringConfig) -> Result<Self> {
        dictionary.validate()?;
        scoring.validate()?;
        let extractor = SkillExtractor::new(&dictionary)?;
        log::debug!(
            "engine ready: {} skills, {} match patterns",
            dictionary.skill_count(),
            extractor.pattern_count()
        );
        Ok(Self {
            dictionary,
            extractor,
            suggestions: SuggestionAnalyzer::new(),
            scoring,
        })
    }

    pub fn dictionary(&self) -> &SkillDictionary {
        &self.dictionary
    }

    /// Runs the full pipeline over the two texts. Infallible: empty
    /// input produces the sentinel report instead of an error.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchReport {
        if resume_text.is_empty() || job_text.is_empty() {
            log::warn!("missing resume or job description text, returning empty analysis");
            return MatchReport::empty();
        }

        let resume_skills = self.extractor.extract(resume_text);
        let job_skills = self.extractor.extract(job_text);

        let comparison = compare_skills(&resume_skills, &job_skills, &self.scoring);
        let match_rate = calculate_match_rate(&comparison, &self.scoring);
        let recruiter_tips = self.suggestions.recruiter_tips(resume_text, &comparison);
        let formatting_analysis = self.suggestions.formatting_checks(resume_text);
        let progress_stats = progress_stats(&comparison, &formatting_analysis);

        log::debug!(
            "analysis complete: {}% match, {} technical / {} soft matched, {} total issues",
            match_rate,
            comparison.technical.matched.len(),
            comparison.soft.matched.len(),
            progress_stats.total_issues
        );

        MatchReport {
            match_rate,
            skill_comparison: comparison,
            recruiter_tips,
            formatting_analysis,
            progress_stats,
            timestamp: Utc::now(),
        }
    }
}
