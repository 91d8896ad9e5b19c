//! Matched / missing / extra partition between two skill extractions

use crate::config::ScoringConfig;
use crate::engine::extraction::SkillExtraction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Literal or synonym hit. The engine does no fuzzy matching, so this
    /// is currently the only variant.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSkill {
    pub skill: String,
    pub resume_count: u32,
    pub job_count: u32,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSkill {
    pub skill: String,
    pub job_count: u32,
    /// Heuristic [0,1] rank for suggestion generation, never scoring.
    pub importance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraSkill {
    pub skill: String,
    pub resume_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub matched: Vec<MatchedSkill>,
    pub missing: Vec<MissingSkill>,
    pub extra: Vec<ExtraSkill>,
}

impl CategoryComparison {
    /// Skills the job description asked for in this category.
    pub fn required_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub technical: CategoryComparison,
    pub soft: CategoryComparison,
}

/// Partitions both categories. Presence decides matched vs missing: a
/// skill mentioned once in each document is matched no matter how often
/// the job description repeats it.
pub fn compare_skills(
    resume: &SkillExtraction,
    job: &SkillExtraction,
    scoring: &ScoringConfig,
) -> SkillComparison {
    SkillComparison {
        technical: compare_category(&resume.technical, &job.technical, scoring),
        soft: compare_category(&resume.soft, &job.soft, scoring),
    }
}

fn compare_category(
    resume: &BTreeMap<String, u32>,
    job: &BTreeMap<String, u32>,
    scoring: &ScoringConfig,
) -> CategoryComparison {
    let mut comparison = CategoryComparison::default();

    for (skill, &job_count) in job {
        match resume.get(skill) {
            Some(&resume_count) => comparison.matched.push(MatchedSkill {
                skill: skill.clone(),
                resume_count,
                job_count,
                match_type: MatchType::Exact,
            }),
            None => comparison.missing.push(MissingSkill {
                skill: skill.clone(),
                job_count,
                importance: skill_importance(skill, job_count, scoring),
            }),
        }
    }

    // Resume-only skills are diagnostic output and never affect scoring.
    for (skill, &resume_count) in resume {
        if !job.contains_key(skill) {
            comparison.extra.push(ExtraSkill {
                skill: skill.clone(),
                resume_count,
            });
        }
    }

    comparison
}

/// Importance of a missing skill: how often the job description repeats
/// it (saturating at `frequency_saturation` mentions), boosted for skills
/// on the configured critical list, clamped to [0,1].
pub fn skill_importance(skill: &str, job_count: u32, scoring: &ScoringConfig) -> f64 {
    let base = (f64::from(job_count) / scoring.frequency_saturation).min(1.0);
    let boosted = if scoring.is_critical(skill) {
        base * scoring.critical_boost
    } else {
        base
    };
    boosted.min(1.0)
}
