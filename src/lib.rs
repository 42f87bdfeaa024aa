pub mod audio;
pub mod config;
pub mod content;
pub mod error;
pub mod models;

pub use error::{AudioError, ContentError};
pub use models::{ActiveQuizItem, AnswerOutcome, ContentStore, QuizItem, QuizSession, QuizState, SentenceEntry, VocabEntry};
