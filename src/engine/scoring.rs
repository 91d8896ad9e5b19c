//! Category scores and the weighted overall match rate

use crate::config::ScoringConfig;
use crate::engine::comparison::{CategoryComparison, SkillComparison};

/// Overall 0..100 match rate: the technical and soft category scores
/// combined by the configured weights (normalized by their sum, so any
/// positive weight pair keeps the result in range).
pub fn calculate_match_rate(comparison: &SkillComparison, scoring: &ScoringConfig) -> u8 {
    let technical_required = comparison.technical.required_count();
    let soft_required = comparison.soft.required_count();

    // Nothing required in either category is a perfect match by
    // convention, handled before any division.
    if technical_required == 0 && soft_required == 0 {
        return 100;
    }

    let technical_score = category_score(&comparison.technical);
    let soft_score = category_score(&comparison.soft);

    let total_weight = scoring.technical_weight + scoring.soft_weight;
    let overall = (technical_score * scoring.technical_weight + soft_score * scoring.soft_weight)
        / total_weight;
    overall.round() as u8
}

/// Percentage of job-required skills in this category that the resume
/// covers; 100 when the category required nothing.
pub fn category_score(category: &CategoryComparison) -> f64 {
    let required = category.required_count();
    if required == 0 {
        return 100.0;
    }
    (category.matched.len() as f64 / required as f64) * 100.0
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

    fn missing(skill: &str) -> MissingSkill {
        MissingSkill {
            skill: skill.to_string(),
            job_count: 1,
            importance: 0.5,
        }
    }

    fn comparison(
        technical_matched: &[&str],
        technical_missing: &[&str],
        soft_matched: &[&str],
        soft_missing: &[&str],
    ) -> SkillComparison {
        SkillComparison {
            technical: CategoryComparison {
                matched: technical_matched.iter().map(|s| matched(s)).collect(),
                missing: technical_missing.iter().map(|s| missing(s)).collect(),
                extra: Vec::new(),
            },
            soft: CategoryComparison {
                matched: soft_matched.iter().map(|s| matched(s)).collect(),
                missing: soft_missing.iter().map(|s| missing(s)).collect(),
                extra: Vec::new(),
            },
        }
    }

    #[test]
    fn test_nothing_required_scores_perfect() {
        let rate = calculate_match_rate(&comparison(&[], &[], &[], &[]), &ScoringConfig::default());
        assert_eq!(rate, 100);
    }

    #[test]
    fn test_full_coverage_scores_perfect() {
        let rate = calculate_match_rate(
            &comparison(&["python", "sql"], &[], &["leadership"], &[]),
            &ScoringConfig::default(),
        );
        assert_eq!(rate, 100);
    }

    #[test]
    fn test_seventy_thirty_weighting() {
        // technical 100, soft 50 -> 100*0.7 + 50*0.3 = 85
        let rate = calculate_match_rate(
            &comparison(&["python", "sql"], &[], &["leadership"], &["communication"]),
            &ScoringConfig::default(),
        );
        assert_eq!(rate, 85);
    }

    #[test]
    fn test_empty_category_scores_hundred_in_weighting() {
        // technical 0/2, soft required nothing -> 0*0.7 + 100*0.3 = 30
        let rate = calculate_match_rate(
            &comparison(&[], &["python", "sql"], &[], &[]),
            &ScoringConfig::default(),
        );
        assert_eq!(rate, 30);
    }

    #[test]
    fn test_rounding_to_nearest() {
        // technical 1/3 = 33.33.., soft 100 -> 33.33*0.7 + 100*0.3 = 53.33 -> 53
        let rate = calculate_match_rate(
            &comparison(&["python"], &["sql", "aws"], &["leadership"], &[]),
            &ScoringConfig::default(),
        );
        assert_eq!(rate, 53);
    }

    #[test]
    fn test_bounds_hold_for_unnormalized_weights() {
        let scoring = ScoringConfig {
            technical_weight: 5.0,
            soft_weight: 2.0,
            ..ScoringConfig::default()
        };
        let best = calculate_match_rate(&comparison(&["python"], &[], &["teamwork"], &[]), &scoring);
        let worst = calculate_match_rate(&comparison(&[], &["python"], &[], &["teamwork"]), &scoring);
        assert_eq!(best, 100);
        assert_eq!(worst, 0);
    }

    #[test]
    fn test_category_score_zero_required() {
        assert!((category_score(&CategoryComparison::default()) - 100.0).abs() < f64::EPSILON);
    }
}
