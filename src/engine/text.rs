//! Text statistics shown alongside detailed reports

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub characters: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let words = text.unicode_words().count();
        let sentences = text
            .unicode_sentences()
            .filter(|sentence| !sentence.trim().is_empty())
            .count();
        let characters = text.chars().count();

        Self {
            words,
            sentences,
            characters,
        }
    }
}
