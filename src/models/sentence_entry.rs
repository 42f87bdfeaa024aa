//! Example sentence shown under the vocabulary cards
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceEntry {
    pub amis: String,
    pub chinese: String,
    pub icon: String,
    pub source: String,
}

impl SentenceEntry {
    pub fn new(amis: &str, chinese: &str, icon: &str, source: &str) -> Self {
        Self {
            amis: amis.to_string(),
            chinese: chinese.to_string(),
            icon: icon.to_string(),
            source: source.to_string(),
        }
    }
}
