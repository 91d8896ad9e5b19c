//! Recruiter tips and formatting checks over the resume text

use crate::engine::comparison::SkillComparison;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Missing technical skills above this importance are called out as
/// critical in the tips.
const CRITICAL_IMPORTANCE_THRESHOLD: f64 = 0.7;
/// At most this many missing skills are named in the critical tip.
const MAX_NAMED_SKILLS: usize = 3;
const SHORT_RESUME_WORDS: usize = 200;
const LONG_RESUME_WORDS: usize = 800;
const MIN_ACHIEVEMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Success,
    Warning,
    Error,
}

/// One tip or formatting check in the report. The icon is part of the
/// payload so every consumer renders the same glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Tip {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(TipKind::Success, title, description, "✓")
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(TipKind::Warning, title, description, "⚠️")
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(TipKind::Error, title, description, "✗")
    }

    fn new(
        kind: TipKind,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: &str,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            icon: icon.to_string(),
        }
    }
}

/// Runs the tip and formatting checks. Holds the compiled patterns so a
/// long-lived engine never recompiles them per call.
pub struct SuggestionAnalyzer {
    achievement_regex: Regex,
    phone_regex: Regex,
    summary_regex: Regex,
    experience_regex: Regex,
    education_regex: Regex,
    skills_regex: Regex,
    all_caps_regex: Regex,
}

impl Default for SuggestionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionAnalyzer {
    pub fn new() -> Self {
        let achievement_regex =
            Regex::new(r"(?i)\d+[%$k]|\d+\s*(?:percent|million|thousand|years?|months?)")
                .expect("Invalid achievement regex");
        let phone_regex =
            Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("Invalid phone regex");
        let summary_regex =
            Regex::new(r"(?i)summary|profile|objective").expect("Invalid summary regex");
        let experience_regex =
            Regex::new(r"(?i)experience|work|employment").expect("Invalid experience regex");
        let education_regex =
            Regex::new(r"(?i)education|degree|university|college").expect("Invalid education regex");
        let skills_regex =
            Regex::new(r"(?i)skills|technical|competencies").expect("Invalid skills regex");
        let all_caps_regex = Regex::new(r"[A-Z]{10,}").expect("Invalid all-caps regex");

        Self {
            achievement_regex,
            phone_regex,
            summary_regex,
            experience_regex,
            education_regex,
            skills_regex,
            all_caps_regex,
        }
    }

    /// Four independent checks in fixed order; each appends its tips
    /// regardless of what the earlier checks produced.
    pub fn recruiter_tips(&self, resume_text: &str, comparison: &SkillComparison) -> Vec<Tip> {
        let mut tips = Vec::new();

        let critical_missing: Vec<&str> = comparison
            .technical
            .missing
            .iter()
            .filter(|missing| missing.importance > CRITICAL_IMPORTANCE_THRESHOLD)
            .map(|missing| missing.skill.as_str())
            .collect();
        if !critical_missing.is_empty() {
            let named = critical_missing
                .iter()
                .take(MAX_NAMED_SKILLS)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            tips.push(Tip::error(
                "Critical Skills Missing",
                format!(
                    "Add experience with {} to match job requirements.",
                    named
                ),
            ));
        }

        let word_count = resume_text.split_whitespace().count();
        if word_count < SHORT_RESUME_WORDS {
            tips.push(Tip::warning(
                "Resume Too Short",
                "Your resume appears brief. Consider adding more details about your experience and achievements.",
            ));
        } else if word_count > LONG_RESUME_WORDS {
            tips.push(Tip::warning(
                "Resume Length",
                "Consider condensing your resume to 1-2 pages for better readability.",
            ));
        }

        let achievements = self.achievement_regex.find_iter(resume_text).count();
        if achievements < MIN_ACHIEVEMENTS {
            tips.push(Tip::warning(
                "Add Quantifiable Results",
                "Include more specific numbers and metrics to demonstrate your impact.",
            ));
        } else {
            tips.push(Tip::success(
                "Good Use of Metrics",
                format!(
                    "Found {} quantifiable achievements. This helps demonstrate your impact.",
                    achievements
                ),
            ));
        }

        if !resume_text.contains('@') {
            tips.push(Tip::error(
                "Missing Email",
                "Add your email address so recruiters can contact you.",
            ));
        }
        if !self.phone_regex.is_match(resume_text) {
            tips.push(Tip::error(
                "Missing Phone Number",
                "Include your phone number for recruiter contact.",
            ));
        }

        tips
    }

    /// Five section/formatting checks; every check always emits exactly
    /// one entry, success or not.
    pub fn formatting_checks(&self, resume_text: &str) -> Vec<Tip> {
        let mut checks = Vec::new();

        let has_summary = self.summary_regex.is_match(resume_text);
        checks.push(if has_summary {
            Tip::success("Professional Summary", "Professional summary section found.")
        } else {
            Tip::warning("Professional Summary", "Consider adding a professional summary.")
        });

        // A resume without any experience section is the one structural
        // problem treated as an error rather than a warning.
        let has_experience = self.experience_regex.is_match(resume_text);
        checks.push(if has_experience {
            Tip::success("Work Experience", "Work experience section found.")
        } else {
            Tip::error("Work Experience", "Work experience section missing.")
        });

        let has_education = self.education_regex.is_match(resume_text);
        checks.push(if has_education {
            Tip::success("Education Section", "Education section found.")
        } else {
            Tip::warning("Education Section", "Consider adding education information.")
        });

        let has_skills = self.skills_regex.is_match(resume_text);
        checks.push(if has_skills {
            Tip::success("Skills Section", "Skills section found.")
        } else {
            Tip::warning("Skills Section", "Consider adding a dedicated skills section.")
        });

        let has_all_caps = self.all_caps_regex.is_match(resume_text);
        checks.push(if has_all_caps {
            Tip::warning("Text Formatting", "Avoid excessive use of ALL CAPS text.")
        } else {
            Tip::success("Text Formatting", "Good text formatting detected.")
        });

        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::comparison::MissingSkill;

    fn analyzer() -> SuggestionAnalyzer {
        SuggestionAnalyzer::new()
    }

    fn comparison_with_missing(skills: &[(&str, f64)]) -> SkillComparison {
        let mut comparison = SkillComparison::default();
        comparison.technical.missing = skills
            .iter()
            .map(|(skill, importance)| MissingSkill {
                skill: skill.to_string(),
                job_count: 3,
                importance: *importance,
            })
            .collect();
        comparison
    }

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_critical_missing_names_first_three() {
        let comparison = comparison_with_missing(&[
            ("python", 0.9),
            ("react", 0.8),
            ("aws", 0.95),
            ("docker", 0.85),
        ]);
        let tips = analyzer().recruiter_tips(&words(300), &comparison);

        let critical = &tips[0];
        assert_eq!(critical.kind, TipKind::Error);
        assert_eq!(critical.title, "Critical Skills Missing");
        assert!(critical.description.contains("python, react, aws"));
        assert!(!critical.description.contains("docker"));
    }

    #[test]
    fn test_low_importance_missing_not_critical() {
        let comparison = comparison_with_missing(&[("docker", 0.4)]);
        let tips = analyzer().recruiter_tips(&words(300), &comparison);
        assert!(tips.iter().all(|tip| tip.title != "Critical Skills Missing"));
    }

    #[test]
    fn test_short_resume_warning() {
        let tips = analyzer().recruiter_tips(&words(50), &SkillComparison::default());
        assert!(tips.iter().any(|tip| tip.title == "Resume Too Short"));
        assert!(tips.iter().all(|tip| tip.title != "Resume Length"));
    }

    #[test]
    fn test_long_resume_warning() {
        let tips = analyzer().recruiter_tips(&words(900), &SkillComparison::default());
        assert!(tips.iter().any(|tip| tip.title == "Resume Length"));
        assert!(tips.iter().all(|tip| tip.title != "Resume Too Short"));
    }

    #[test]
    fn test_medium_resume_no_length_tip() {
        let tips = analyzer().recruiter_tips(&words(400), &SkillComparison::default());
        assert!(tips
            .iter()
            .all(|tip| tip.title != "Resume Too Short" && tip.title != "Resume Length"));
    }

    #[test]
    fn test_achievement_metrics_counted() {
        let text = format!(
            "{} Increased revenue by 25% over 3 years, saving $40k and 10 percent of budget.",
            words(250)
        );
        let tips = analyzer().recruiter_tips(&text, &SkillComparison::default());
        let metrics = tips
            .iter()
            .find(|tip| tip.title == "Good Use of Metrics")
            .unwrap();
        assert_eq!(metrics.kind, TipKind::Success);
        assert!(metrics.description.contains("4 quantifiable achievements"));
    }

    #[test]
    fn test_few_achievements_warns() {
        let tips = analyzer().recruiter_tips(&words(250), &SkillComparison::default());
        assert!(tips.iter().any(|tip| tip.title == "Add Quantifiable Results"));
    }

    #[test]
    fn test_missing_contact_info_two_errors() {
        let tips = analyzer().recruiter_tips(&words(250), &SkillComparison::default());
        let errors: Vec<_> = tips.iter().filter(|tip| tip.kind == TipKind::Error).collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].title, "Missing Email");
        assert_eq!(errors[1].title, "Missing Phone Number");
    }

    #[test]
    fn test_present_contact_info_no_errors() {
        let text = format!("{} jane@example.com 555-123-4567", words(250));
        let tips = analyzer().recruiter_tips(&text, &SkillComparison::default());
        assert!(tips.iter().all(|tip| tip.kind != TipKind::Error));
    }

    #[test]
    fn test_phone_number_formats() {
        let analyzer = analyzer();
        for number in ["555-123-4567", "555.123.4567", "555 123 4567", "5551234567"] {
            let tips = analyzer.recruiter_tips(
                &format!("{} contact@me.dev {}", words(250), number),
                &SkillComparison::default(),
            );
            assert!(
                tips.iter().all(|tip| tip.title != "Missing Phone Number"),
                "number {:?} should be recognized",
                number
            );
        }
    }

    #[test]
    fn test_formatting_all_sections_present() {
        let text = "Summary of my work experience, education and skills.";
        let checks = analyzer().formatting_checks(text);
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(|check| check.kind == TipKind::Success));
    }

    #[test]
    fn test_formatting_missing_experience_is_error() {
        let text = "Summary. Education: State University. Skills: many.";
        let checks = analyzer().formatting_checks(text);
        let experience = checks
            .iter()
            .find(|check| check.title == "Work Experience")
            .unwrap();
        assert_eq!(experience.kind, TipKind::Error);
    }

    #[test]
    fn test_formatting_missing_sections_warn() {
        let checks = analyzer().formatting_checks("nothing useful here");
        let summary = checks
            .iter()
            .find(|check| check.title == "Professional Summary")
            .unwrap();
        assert_eq!(summary.kind, TipKind::Warning);
        let education = checks
            .iter()
            .find(|check| check.title == "Education Section")
            .unwrap();
        assert_eq!(education.kind, TipKind::Warning);
    }

    #[test]
    fn test_all_caps_run_warns() {
        let with_caps = format!("Summary work education skills {}", "ABCDEFGHIJKL");
        let checks = analyzer().formatting_checks(&with_caps);
        let formatting = checks
            .iter()
            .find(|check| check.title == "Text Formatting")
            .unwrap();
        assert_eq!(formatting.kind, TipKind::Warning);

        let checks = analyzer().formatting_checks("Summary work education skills");
        let formatting = checks
            .iter()
            .find(|check| check.title == "Text Formatting")
            .unwrap();
        assert_eq!(formatting.kind, TipKind::Success);
        assert_eq!(formatting.icon, "✓");
    }

    #[test]
    fn test_tip_serialization_uses_type_key() {
        let json = serde_json::to_value(Tip::error("T", "D")).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["icon"], "✗");
    }
}
