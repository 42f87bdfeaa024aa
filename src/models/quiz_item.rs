//! Quiz questions: the immutable template and the per-round shuffled instance.
use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// Multiple-choice question as authored in the content tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub prompt: String,
    /// Text sent to the speech service. Empty means the question has no audio.
    #[serde(default)]
    pub audio_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub hint: String,
}

impl QuizItem {
    pub fn new(prompt: &str, audio_text: &str, options: &[&str], correct_answer: &str, hint: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            audio_text: audio_text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
            hint: hint.to_string(),
        }
    }

    /// Checks the authoring rules: 2 to 3 distinct options, one of which is the answer.
    pub fn validate(&self) -> Result<(), ContentError> {
        if !(2..=3).contains(&self.options.len()) {
            return Err(ContentError::BadOptionCount {
                prompt: self.prompt.clone(),
                count: self.options.len(),
            });
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(ContentError::DuplicateOption {
                    prompt: self.prompt.clone(),
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(ContentError::AnswerNotInOptions {
                prompt: self.prompt.clone(),
                answer: self.correct_answer.clone(),
            });
        }

        Ok(())
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_text.trim().is_empty()
    }
}

/// A QuizItem drawn into the current round, with its options in display order.
#[derive(Clone, Debug)]
pub struct ActiveQuizItem {
    pub item: QuizItem,
    pub shuffled_options: Vec<String>,
}

impl ActiveQuizItem {
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.item.correct_answer == chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> QuizItem {
        QuizItem::new(
            "單字測驗：Omah",
            "Omah",
            &["田地", "家", "學校"],
            "田地",
            "種菜的地方 (Row 676)",
        )
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(sample_item().validate().is_ok());
    }

    #[test]
    fn test_answer_must_be_an_option() {
        let mut item = sample_item();
        item.correct_answer = "海".to_string();

        let err = item.validate().unwrap_err();
        assert!(matches!(err, ContentError::AnswerNotInOptions { .. }));
    }

    #[test]
    fn test_option_count_bounds() {
        let mut item = sample_item();
        item.options = vec!["田地".to_string()];
        assert!(matches!(
            item.validate().unwrap_err(),
            ContentError::BadOptionCount { count: 1, .. }
        ));

        item.options = vec!["田地", "家", "學校", "河"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(matches!(
            item.validate().unwrap_err(),
            ContentError::BadOptionCount { count: 4, .. }
        ));
    }

    #[test]
    fn test_duplicate_options_rejected() {
        let mut item = sample_item();
        item.options = vec!["田地".to_string(), "田地".to_string()];

        assert!(matches!(
            item.validate().unwrap_err(),
            ContentError::DuplicateOption { .. }
        ));
    }

    #[test]
    fn test_missing_audio_text() {
        let mut item = sample_item();
        assert!(item.has_audio());
        item.audio_text = "  ".to_string();
        assert!(!item.has_audio());
    }
}
