//! Per-area progress statistics derived from a finished analysis

use crate::engine::comparison::{CategoryComparison, SkillComparison};
use crate::engine::scoring::category_score;
use crate::engine::suggestions::{Tip, TipKind};
use serde::{Deserialize, Serialize};

/// Missing technical skills above this importance count as recruiter-tip
/// issues.
const TIP_IMPORTANCE_THRESHOLD: f64 = 0.5;
/// Fixed progress value for the recruiter-tips area. Not derived from
/// the generated tips; kept as a constant on purpose.
const RECRUITER_TIPS_PROGRESS: u8 = 70;
/// Progress lost per formatting issue in the searchability area.
const SEARCHABILITY_PENALTY: u32 = 20;
/// Progress lost per formatting issue in the formatting area.
const FORMATTING_PENALTY: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaProgress {
    pub issues: u32,
    pub progress: u8,
}

impl AreaProgress {
    fn new(issues: u32, progress: u8) -> Self {
        Self { issues, progress }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub searchability: AreaProgress,
    pub hard_skills: AreaProgress,
    pub soft_skills: AreaProgress,
    pub recruiter_tips: AreaProgress,
    pub formatting: AreaProgress,
    pub total_issues: u32,
}

pub fn progress_stats(comparison: &SkillComparison, formatting_checks: &[Tip]) -> ProgressStats {
    let technical_issues = comparison.technical.missing.len() as u32;
    let soft_issues = comparison.soft.missing.len() as u32;
    let format_issues = formatting_checks
        .iter()
        .filter(|check| matches!(check.kind, TipKind::Error | TipKind::Warning))
        .count() as u32;

    let tip_issues = comparison
        .technical
        .missing
        .iter()
        .filter(|missing| missing.importance > TIP_IMPORTANCE_THRESHOLD)
        .count() as u32
        + soft_issues;

    ProgressStats {
        searchability: AreaProgress::new(
            format_issues,
            penalized(format_issues, SEARCHABILITY_PENALTY),
        ),
        hard_skills: AreaProgress::new(technical_issues, coverage(&comparison.technical)),
        soft_skills: AreaProgress::new(soft_issues, coverage(&comparison.soft)),
        recruiter_tips: AreaProgress::new(tip_issues, RECRUITER_TIPS_PROGRESS),
        formatting: AreaProgress::new(format_issues, penalized(format_issues, FORMATTING_PENALTY)),
        total_issues: technical_issues + soft_issues + format_issues,
    }
}

fn penalized(issues: u32, penalty_per_issue: u32) -> u8 {
    100u32.saturating_sub(issues.saturating_mul(penalty_per_issue)) as u8
}

fn coverage(category: &CategoryComparison) -> u8 {
    category_score(category).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::comparison::{MatchType, MatchedSkill, MissingSkill};

    fn matched(skill: &str) -> MatchedSkill {
        MatchedSkill {
            skill: skill.to_string(),
            resume_count: 1,
            job_count: 1,
            match_type: MatchType::Exact,
        }
    }

    fn missing(skill: &str, importance: f64) -> MissingSkill {
        MissingSkill {
            skill: skill.to_string(),
            job_count: 1,
            importance,
        }
    }

    #[test]
    fn test_clean_analysis_scores_high() {
        let comparison = SkillComparison::default();
        let checks = vec![Tip::success("Work Experience", "found")];
        let stats = progress_stats(&comparison, &checks);

        assert_eq!(stats.searchability, AreaProgress::new(0, 100));
        assert_eq!(stats.hard_skills, AreaProgress::new(0, 100));
        assert_eq!(stats.soft_skills, AreaProgress::new(0, 100));
        assert_eq!(stats.recruiter_tips, AreaProgress::new(0, 70));
        assert_eq!(stats.formatting, AreaProgress::new(0, 100));
        assert_eq!(stats.total_issues, 0);
    }

    #[test]
    fn test_formatting_penalties() {
        let checks = vec![
            Tip::warning("Professional Summary", "missing"),
            Tip::error("Work Experience", "missing"),
            Tip::success("Skills Section", "found"),
        ];
        let stats = progress_stats(&SkillComparison::default(), &checks);

        assert_eq!(stats.searchability, AreaProgress::new(2, 60));
        assert_eq!(stats.formatting, AreaProgress::new(2, 70));
        assert_eq!(stats.total_issues, 2);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let checks: Vec<Tip> = (0..6).map(|i| Tip::warning(format!("C{}", i), "x")).collect();
        let stats = progress_stats(&SkillComparison::default(), &checks);
        assert_eq!(stats.searchability.progress, 0);
        assert_eq!(stats.formatting.progress, 10);
    }

    #[test]
    fn test_skill_coverage_percentages() {
        let mut comparison = SkillComparison::default();
        comparison.technical.matched = vec![matched("python")];
        comparison.technical.missing = vec![missing("sql", 0.3), missing("aws", 0.3)];
        comparison.soft.matched = vec![matched("leadership")];

        let stats = progress_stats(&comparison, &[]);
        assert_eq!(stats.hard_skills, AreaProgress::new(2, 33));
        assert_eq!(stats.soft_skills, AreaProgress::new(0, 100));
        assert_eq!(stats.total_issues, 2);
    }

    #[test]
    fn test_recruiter_tip_issues_use_importance_threshold() {
        let mut comparison = SkillComparison::default();
        comparison.technical.missing = vec![
            missing("python", 0.9),
            missing("docker", 0.6),
            missing("jira", 0.2),
        ];
        comparison.soft.missing = vec![missing("teamwork", 0.1)];

        let stats = progress_stats(&comparison, &[]);
        // Two technical skills above 0.5 plus one soft issue.
        assert_eq!(stats.recruiter_tips.issues, 3);
        assert_eq!(stats.recruiter_tips.progress, 70);
        assert_eq!(stats.total_issues, 4);
    }

    #[test]
    fn test_serializes_camel_case() {
        let stats = progress_stats(&SkillComparison::default(), &[]);
        let json = serde_json::to_value(stats).unwrap();
        assert!(json.get("hardSkills").is_some());
        assert!(json.get("softSkills").is_some());
        assert!(json.get("recruiterTips").is_some());
        assert!(json.get("totalIssues").is_some());
        assert!(json["searchability"].get("issues").is_some());
    }
}
