//! Read-only vocabulary, sentence and quiz tables for one unit.
use super::quiz_session::ROUND_SIZE;
use super::{QuizItem, SentenceEntry, VocabEntry};
use crate::content::builtin::{self, Dataset};
use crate::error::ContentError;

#[derive(Clone, Debug)]
pub struct ContentStore {
    title: String,
    vocabulary: Vec<VocabEntry>,
    sentences: Vec<SentenceEntry>,
    quiz_pool: Vec<QuizItem>,
}

impl ContentStore {
    /// Builds a store after checking every quiz item and the pool size.
    pub fn new(
        title: &str,
        vocabulary: Vec<VocabEntry>,
        sentences: Vec<SentenceEntry>,
        quiz_pool: Vec<QuizItem>,
    ) -> Result<Self, ContentError> {
        for item in &quiz_pool {
            item.validate()?;
        }

        if quiz_pool.len() < ROUND_SIZE {
            return Err(ContentError::PoolTooSmall {
                available: quiz_pool.len(),
                required: ROUND_SIZE,
            });
        }

        Ok(Self {
            title: title.to_string(),
            vocabulary,
            sentences,
            quiz_pool,
        })
    }

    pub fn builtin(dataset: Dataset) -> Result<Self, ContentError> {
        Self::new(
            builtin::UNIT_TITLE,
            builtin::vocabulary(dataset),
            builtin::sentences(),
            builtin::quiz_pool(),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn list_vocabulary(&self) -> &[VocabEntry] {
        &self.vocabulary
    }

    pub fn list_sentences(&self) -> &[SentenceEntry] {
        &self.sentences
    }

    pub fn list_quiz_pool(&self) -> &[QuizItem] {
        &self.quiz_pool
    }
}
