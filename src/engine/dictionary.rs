//! Skill dictionary: canonical skill names, the synonym table, and lookups

use crate::config::DictionaryConfig;
use crate::error::{Result, SkillMatchError};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Built-in canonical technical skills, lower-case.
const BUILTIN_TECHNICAL: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "sql",
    "html",
    "css",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "c++",
    "c#",
    ".net",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "github",
    "gitlab",
    "jira",
    "confluence",
    "machine learning",
    "artificial intelligence",
    "data science",
    "big data",
    "analytics",
    "tableau",
    "power bi",
    "agile",
    "scrum",
    "kanban",
    "devops",
    "ci/cd",
    "microservices",
    "api",
    "rest",
    "graphql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
];

/// Built-in canonical soft skills, lower-case.
const BUILTIN_SOFT: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical thinking",
    "creative thinking",
    "adaptability",
    "project management",
    "time management",
    "organization",
    "planning",
    "coordination",
    "customer service",
    "client relations",
    "presentation",
    "negotiation",
    "mentoring",
    "training",
    "strategic thinking",
    "innovation",
    "critical thinking",
    "decision making",
    "conflict resolution",
    "emotional intelligence",
    "cultural awareness",
    "flexibility",
    "resilience",
];

/// Built-in synonym table. Every key is a canonical skill and no surface
/// form collides with a canonical name or with another skill's synonym;
/// `validate` enforces the same rules for user-supplied additions.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "nodejs", "ecmascript", "es6", "es2015"]),
    ("python", &["py", "python3", "python2", "django", "flask"]),
    (
        "artificial intelligence",
        &["ai", "ml", "deep learning", "neural networks"],
    ),
    ("react", &["reactjs", "react.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("agile", &["sprint"]),
    (
        "project management",
        &["pm", "project manager", "scrum master"],
    ),
    (
        "communication",
        &["verbal communication", "written communication", "interpersonal"],
    ),
    (
        "leadership",
        &["team leadership", "team lead", "leading teams", "management"],
    ),
    ("problem solving", &["troubleshooting"]),
    ("teamwork", &["collaboration", "team player", "cross-functional"]),
    ("time management", &["prioritization", "multitasking"]),
    (
        "customer service",
        &["client service", "customer support", "customer relations"],
    ),
];

/// Similarity floor for "did you mean" suggestions in `closest`.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    Soft,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Soft => write!(f, "soft"),
        }
    }
}

/// Result of resolving an arbitrary term against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSkill<'a> {
    pub canonical: &'a str,
    pub category: SkillCategory,
    /// The synonym that matched, when the term was not the canonical name.
    pub via_synonym: Option<&'a str>,
}

/// Canonical skill names plus the synonym table. Read-only once built;
/// shared by reference across the extraction pipeline.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    technical: Vec<String>,
    soft: Vec<String>,
    synonyms: BTreeMap<String, Vec<String>>,
}

impl SkillDictionary {
    /// The built-in dictionary, without user additions.
    pub fn builtin() -> Self {
        Self {
            technical: BUILTIN_TECHNICAL.iter().map(|s| s.to_string()).collect(),
            soft: BUILTIN_SOFT.iter().map(|s| s.to_string()).collect(),
            synonyms: BUILTIN_SYNONYMS
                .iter()
                .map(|(skill, forms)| {
                    (
                        skill.to_string(),
                        forms.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Built-in dictionary merged with the additions from `config`,
    /// validated as a whole.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        let mut dictionary = Self::builtin();

        for skill in &config.extra_technical_skills {
            dictionary.add_skill(skill, SkillCategory::Technical);
        }
        for skill in &config.extra_soft_skills {
            dictionary.add_skill(skill, SkillCategory::Soft);
        }
        for (canonical, forms) in &config.extra_synonyms {
            dictionary.add_synonyms(canonical, forms);
        }

        dictionary.validate()?;
        Ok(dictionary)
    }

    fn add_skill(&mut self, name: &str, category: SkillCategory) {
        let name = normalize(name);
        if name.is_empty() {
            return;
        }
        let list = match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
        };
        if !list.iter().any(|s| *s == name) {
            list.push(name);
        }
    }

    fn add_synonyms(&mut self, canonical: &str, forms: &[String]) {
        let canonical = normalize(canonical);
        if canonical.is_empty() {
            return;
        }
        let entry = self.synonyms.entry(canonical).or_default();
        for form in forms {
            let form = normalize(form);
            if !form.is_empty() && !entry.iter().any(|s| *s == form) {
                entry.push(form);
            }
        }
    }

    /// Checks the structural rules the matcher relies on: no name in both
    /// categories, synonym keys are canonical skills, and every surface
    /// form belongs to exactly one skill.
    pub fn validate(&self) -> Result<()> {
        let mut canonical_names: BTreeSet<&str> = BTreeSet::new();
        for name in self.technical.iter().chain(self.soft.iter()) {
            if !canonical_names.insert(name.as_str()) {
                return Err(SkillMatchError::Dictionary(format!(
                    "'{}' is listed as more than one canonical skill",
                    name
                )));
            }
        }

        let mut seen_forms: BTreeMap<&str, &str> = BTreeMap::new();
        for (canonical, forms) in &self.synonyms {
            if !canonical_names.contains(canonical.as_str()) {
                return Err(SkillMatchError::Dictionary(format!(
                    "synonym entry '{}' is not a canonical skill",
                    canonical
                )));
            }
            for form in forms {
                if canonical_names.contains(form.as_str()) {
                    return Err(SkillMatchError::Dictionary(format!(
                        "'{}' is a canonical skill and cannot be a synonym of '{}'",
                        form, canonical
                    )));
                }
                if let Some(previous) = seen_forms.insert(form.as_str(), canonical.as_str()) {
                    return Err(SkillMatchError::Dictionary(format!(
                        "synonym '{}' belongs to both '{}' and '{}'",
                        form, previous, canonical
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn technical_skills(&self) -> &[String] {
        &self.technical
    }

    pub fn soft_skills(&self) -> &[String] {
        &self.soft
    }

    pub fn synonyms_of(&self, canonical: &str) -> &[String] {
        self.synonyms
            .get(canonical)
            .map(|forms| forms.as_slice())
            .unwrap_or(&[])
    }

    pub fn skill_count(&self) -> usize {
        self.technical.len() + self.soft.len()
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.values().map(|forms| forms.len()).sum()
    }

    pub fn category_of(&self, canonical: &str) -> Option<SkillCategory> {
        if self.technical.iter().any(|s| s == canonical) {
            Some(SkillCategory::Technical)
        } else if self.soft.iter().any(|s| s == canonical) {
            Some(SkillCategory::Soft)
        } else {
            None
        }
    }

    /// Iterates every matchable surface form with its owning skill:
    /// canonical names first, then synonyms, technical before soft.
    pub fn surface_forms(&self) -> impl Iterator<Item = (&str, &str, SkillCategory)> {
        let technical = self
            .technical
            .iter()
            .map(move |skill| (skill, SkillCategory::Technical));
        let soft = self.soft.iter().map(move |skill| (skill, SkillCategory::Soft));
        technical.chain(soft).flat_map(move |(skill, category)| {
            std::iter::once((skill.as_str(), skill.as_str(), category)).chain(
                self.synonyms_of(skill)
                    .iter()
                    .map(move |form| (form.as_str(), skill.as_str(), category)),
            )
        })
    }

    /// Exact resolution of a term to its canonical skill, matching either
    /// the canonical name itself or any registered synonym.
    pub fn resolve(&self, term: &str) -> Option<ResolvedSkill<'_>> {
        let term = normalize(term);
        if let Some(category) = self.category_of(&term) {
            let canonical = self.canonical_ref(&term)?;
            return Some(ResolvedSkill {
                canonical,
                category,
                via_synonym: None,
            });
        }
        for (canonical, forms) in &self.synonyms {
            if let Some(form) = forms.iter().find(|form| **form == term) {
                let category = self.category_of(canonical)?;
                return Some(ResolvedSkill {
                    canonical,
                    category,
                    via_synonym: Some(form),
                });
            }
        }
        None
    }

    /// Nearest canonical skill by Jaro-Winkler similarity, for "did you
    /// mean" output. Returns `None` below the suggestion threshold.
    pub fn closest(&self, term: &str) -> Option<(&str, f64)> {
        let term = normalize(term);
        self.technical
            .iter()
            .chain(self.soft.iter())
            .map(|skill| (skill.as_str(), strsim::jaro_winkler(&term, skill)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    fn canonical_ref(&self, name: &str) -> Option<&str> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .find(|s| s.as_str() == name)
            .map(|s| s.as_str())
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionary_is_valid() {
        let dictionary = SkillDictionary::builtin();
        assert!(dictionary.validate().is_ok());
        assert!(dictionary.technical_skills().len() > 40);
        assert!(dictionary.soft_skills().len() > 20);
        assert!(dictionary.synonym_count() > 30);
    }

    #[test]
    fn test_resolve_canonical_and_synonym() {
        let dictionary = SkillDictionary::builtin();

        let direct = dictionary.resolve("Python").unwrap();
        assert_eq!(direct.canonical, "python");
        assert_eq!(direct.category, SkillCategory::Technical);
        assert_eq!(direct.via_synonym, None);

        let via = dictionary.resolve("ES6").unwrap();
        assert_eq!(via.canonical, "javascript");
        assert_eq!(via.via_synonym, Some("es6"));

        let soft = dictionary.resolve("team player").unwrap();
        assert_eq!(soft.canonical, "teamwork");
        assert_eq!(soft.category, SkillCategory::Soft);

        assert!(dictionary.resolve("underwater basket weaving").is_none());
    }

    #[test]
    fn test_closest_suggests_near_miss() {
        let dictionary = SkillDictionary::builtin();
        let (skill, score) = dictionary.closest("pyton").unwrap();
        assert_eq!(skill, "python");
        assert!(score > 0.9);
        assert!(dictionary.closest("zzzzzz").is_none());
    }

    #[test]
    fn test_config_merge_and_normalization() {
        let mut config = DictionaryConfig::default();
        config.extra_technical_skills.push("  Terraform ".to_string());
        config
            .extra_synonyms
            .insert("terraform".to_string(), vec!["TF".to_string()]);

        let dictionary = SkillDictionary::from_config(&config).unwrap();
        assert_eq!(
            dictionary.category_of("terraform"),
            Some(SkillCategory::Technical)
        );
        assert_eq!(dictionary.resolve("tf").unwrap().canonical, "terraform");
    }

    #[test]
    fn test_validation_rejects_synonym_matching_canonical() {
        let mut config = DictionaryConfig::default();
        config
            .extra_synonyms
            .insert("javascript".to_string(), vec!["python".to_string()]);
        assert!(SkillDictionary::from_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_synonym_key() {
        let mut config = DictionaryConfig::default();
        config
            .extra_synonyms
            .insert("cobol".to_string(), vec!["cob".to_string()]);
        assert!(SkillDictionary::from_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_duplicated_synonym() {
        let mut config = DictionaryConfig::default();
        config
            .extra_synonyms
            .insert("python".to_string(), vec!["js".to_string()]);
        assert!(SkillDictionary::from_config(&config).is_err());
    }

    #[test]
    fn test_skill_in_both_categories_rejected() {
        let mut config = DictionaryConfig::default();
        config.extra_soft_skills.push("python".to_string());
        assert!(SkillDictionary::from_config(&config).is_err());
    }

    #[test]
    fn test_surface_forms_cover_synonyms() {
        let dictionary = SkillDictionary::builtin();
        let forms: Vec<_> = dictionary.surface_forms().collect();
        assert!(forms.contains(&("js", "javascript", SkillCategory::Technical)));
        assert!(forms.contains(&("python", "python", SkillCategory::Technical)));
        assert!(forms.contains(&(
            "collaboration",
            "teamwork",
            SkillCategory::Soft
        )));
    }
}
