//! Quiz session management for the randomized three-question challenge.
//! Tracks the drawn round, the current question and the accumulated score.

use super::selection::select_round;
use super::{ActiveQuizItem, QuizItem};
use chrono::{DateTime, Local};
use rand::Rng;

/// Questions drawn per round.
pub const ROUND_SIZE: usize = 3;
/// Points awarded for each correct answer.
pub const SCORE_AWARD: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    InProgress(usize),
    Completed,
}

/// Result of submitting an answer. A wrong answer is an expected outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { awarded: u32, completed: bool },
    Incorrect { hint: String },
    RoundOver,
}

/// One user's quiz. Owned by the presentation layer; nothing here is shared between sessions.
pub struct QuizSession {
    score: u32,
    current_index: usize,
    active_items: Vec<ActiveQuizItem>,
    session_id: String,
    restarts: u32,
    started_at: DateTime<Local>,
}

impl QuizSession {
    /// Starts a session at question 1 with a freshly drawn round.
    pub fn new<R: Rng + ?Sized>(pool: &[QuizItem], rng: &mut R) -> Self {
        let active_items = select_round(pool, ROUND_SIZE, rng);
        let session_id = new_session_id(rng, 0);
        log::info!("Quiz session {} started", session_id);
        log_round(&session_id, &active_items);

        Self {
            score: 0,
            current_index: 0,
            active_items,
            session_id,
            restarts: 0,
            started_at: Local::now(),
        }
    }

    pub fn state(&self) -> QuizState {
        if self.current_index >= self.active_items.len() {
            QuizState::Completed
        } else {
            QuizState::InProgress(self.current_index)
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == QuizState::Completed
    }

    /// Compares `chosen` to the current question's answer by exact string equality.
    /// Only a correct answer changes the session.
    pub fn submit_answer(&mut self, chosen: &str) -> AnswerOutcome {
        let Some(active) = self.active_items.get(self.current_index) else {
            return AnswerOutcome::RoundOver;
        };

        if !active.is_correct(chosen) {
            log::debug!(
                "Session {}: wrong answer '{}' on question {}",
                self.session_id,
                chosen,
                self.current_index + 1
            );
            return AnswerOutcome::Incorrect {
                hint: active.item.hint.clone(),
            };
        }

        self.score += SCORE_AWARD;
        self.current_index += 1;
        let completed = self.is_completed();

        log::debug!(
            "Session {}: correct answer, score now {}",
            self.session_id,
            self.score
        );
        if completed {
            log::info!(
                "Session {} completed the round with {} points",
                self.session_id,
                self.score
            );
        }

        AnswerOutcome::Correct {
            awarded: SCORE_AWARD,
            completed,
        }
    }

    /// Back to question 1 with zero points, a new session id and a newly drawn round.
    pub fn restart<R: Rng + ?Sized>(&mut self, pool: &[QuizItem], rng: &mut R) {
        self.restarts += 1;
        self.score = 0;
        self.current_index = 0;
        self.active_items = select_round(pool, ROUND_SIZE, rng);
        self.session_id = new_session_id(rng, self.restarts);
        self.started_at = Local::now();

        log::info!("Quiz restarted as session {}", self.session_id);
        log_round(&self.session_id, &self.active_items);
    }

    pub fn current_item(&self) -> Option<&ActiveQuizItem> {
        self.active_items.get(self.current_index)
    }

    pub fn active_items(&self) -> &[ActiveQuizItem] {
        &self.active_items
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_count(&self) -> usize {
        self.active_items.len()
    }

    /// Opaque id used to namespace per-round widget state.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn progress(&self) -> f32 {
        if self.active_items.is_empty() {
            return 1.0;
        }
        self.current_index as f32 / self.active_items.len() as f32
    }

    pub fn question_label(&self) -> String {
        format!(
            "Question {} / {}",
            (self.current_index + 1).min(self.total_count()),
            self.total_count()
        )
    }
}

// Restart counter suffix guarantees a new id even when the random part repeats.
fn new_session_id<R: Rng + ?Sized>(rng: &mut R, restarts: u32) -> String {
    format!("{}-{}", rng.gen_range(1000..=9999), restarts)
}

fn log_round(session_id: &str, items: &[ActiveQuizItem]) {
    for (i, active) in items.iter().enumerate() {
        log::debug!("Session {} question {}: {}", session_id, i + 1, active.item.prompt);
    }
}
