//! Skill extraction: counting canonical and synonym mentions in free text

use crate::engine::dictionary::{SkillCategory, SkillDictionary};
use crate::error::{Result, SkillMatchError};
use aho_corasick::AhoCorasick;
use std::collections::BTreeMap;

/// Frequencies of canonical skills found in one document, per category.
/// Sparse: a skill that never matched has no entry. Sorted keys keep the
/// serialized output stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillExtraction {
    pub technical: BTreeMap<String, u32>,
    pub soft: BTreeMap<String, u32>,
}

impl SkillExtraction {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }

    pub fn category(&self, category: SkillCategory) -> &BTreeMap<String, u32> {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
        }
    }

    pub fn total_mentions(&self) -> u32 {
        self.technical.values().sum::<u32>() + self.soft.values().sum::<u32>()
    }
}

/// Compiled matcher over every surface form in a dictionary. Surface
/// forms are matched case-insensitively and must stand alone word-wise:
/// the bytes immediately before and after a hit may not be ASCII
/// alphanumerics or underscores. That rule keeps names with punctuation
/// ("c++", "ci/cd", ".net") matchable in ordinary prose without letting
/// "go" fire inside "google".
#[derive(Debug)]
pub struct SkillExtractor {
    matcher: AhoCorasick,
    /// Owning skill and category per automaton pattern, in pattern order.
    targets: Vec<(String, SkillCategory)>,
}

impl SkillExtractor {
    pub fn new(dictionary: &SkillDictionary) -> Result<Self> {
        let mut patterns: Vec<&str> = Vec::new();
        let mut targets = Vec::new();
        for (form, canonical, category) in dictionary.surface_forms() {
            patterns.push(form);
            targets.push((canonical.to_string(), category));
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                SkillMatchError::Dictionary(format!("failed to compile skill patterns: {}", e))
            })?;

        Ok(Self { matcher, targets })
    }

    /// Counts every occurrence of every surface form, summing synonym
    /// hits into their canonical skill. Overlapping hits count for each
    /// owner independently, so "node.js" credits both `node.js` and the
    /// `js` synonym of `javascript`.
    pub fn extract(&self, text: &str) -> SkillExtraction {
        let bytes = text.as_bytes();
        let mut extraction = SkillExtraction::default();

        for hit in self.matcher.find_overlapping_iter(text) {
            if !stands_alone(bytes, hit.start(), hit.end()) {
                continue;
            }
            let (skill, category) = &self.targets[hit.pattern().as_usize()];
            let counts = match category {
                SkillCategory::Technical => &mut extraction.technical,
                SkillCategory::Soft => &mut extraction.soft,
            };
            *counts.entry(skill.clone()).or_insert(0) += 1;
        }

        extraction
    }

    pub fn pattern_count(&self) -> usize {
        self.targets.len()
    }
}

fn stands_alone(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = start.checked_sub(1).and_then(|i| bytes.get(i).copied());
    let after = bytes.get(end).copied();
    !before.is_some_and(is_word_byte) && !after.is_some_and(is_word_byte)
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
