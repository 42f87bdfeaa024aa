pub mod content_store;
pub mod quiz_item;
pub mod quiz_session;
pub mod selection;
pub mod sentence_entry;
pub mod vocab_entry;

pub use content_store::ContentStore;
pub use quiz_item::{ActiveQuizItem, QuizItem};
pub use quiz_session::{AnswerOutcome, QuizSession, QuizState};
pub use sentence_entry::SentenceEntry;
pub use vocab_entry::VocabEntry;
