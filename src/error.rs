//! Error types shared by the content loader and the audio service.

use thiserror::Error;

/// Bad or unreadable content. Raised while loading tables, never during a quiz.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("quiz item '{prompt}': correct answer '{answer}' is not one of its options")]
    AnswerNotInOptions { prompt: String, answer: String },

    #[error("quiz item '{prompt}': expected 2 to 3 options, found {count}")]
    BadOptionCount { prompt: String, count: usize },

    #[error("quiz item '{prompt}': option '{option}' appears more than once")]
    DuplicateOption { prompt: String, option: String },

    #[error("quiz pool has {available} items but a round needs {required}")]
    PoolTooSmall { available: usize, required: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text-to-speech failure. Callers treat every variant as non-fatal.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("audio is disabled")]
    Disabled,

    #[error("nothing to say")]
    EmptyText,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("speech service answered with HTTP {0}")]
    Http(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
