//! VocabEntry is a single word card: Amis term, Chinese gloss, display icon and citation
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub amis: String,
    pub chinese: String,
    pub icon: String,
    pub source: String,
}

impl VocabEntry {
    pub fn new(amis: &str, chinese: &str, icon: &str, source: &str) -> Self {
        Self {
            amis: amis.to_string(),
            chinese: chinese.to_string(),
            icon: icon.to_string(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_entry_creation() {
        let entry = VocabEntry::new("Riyar", "海洋 / 海", "🌊", "Moedict: riyar");

        assert_eq!(entry.amis, "Riyar");
        assert_eq!(entry.chinese, "海洋 / 海");
        assert_eq!(entry.icon, "🌊");
        assert_eq!(entry.source, "Moedict: riyar");
    }

    #[test]
    fn test_vocab_entry_clone() {
        let entry1 = VocabEntry::new("Cidal", "太陽", "☀️", "Moedict: cidal");
        let entry2 = entry1.clone();

        assert_eq!(entry1, entry2);
    }
}
