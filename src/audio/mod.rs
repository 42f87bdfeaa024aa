//! Text-to-speech playback for words, sentences and quiz prompts.
//!
//! Synthesis runs on a background thread and reports back through a channel that the UI
//! polls once per frame. Any failure ends as `AudioStatus::Unavailable`; nothing here can
//! affect the quiz.

pub mod google;
pub mod playback;

use crate::error::AudioError;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

pub use google::GoogleTts;
pub use playback::SystemPlayer;

/// How long the "playing" caption stays next to a button.
const PLAYING_CAPTION: Duration = Duration::from_secs(3);

/// Turns text into playable audio bytes.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, AudioError>;
}

/// Plays a synthesized clip.
pub trait AudioOutput: Send + Sync {
    fn play(&self, clip: &[u8]) -> Result<(), AudioError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStatus {
    Idle,
    Loading,
    Playing,
    Unavailable,
}

pub struct AudioPlayer {
    backend: Option<(Arc<dyn SpeechSynthesizer>, Arc<dyn AudioOutput>)>,
    language_tag: String,
    statuses: HashMap<String, (AudioStatus, Instant)>,
    caption_duration: Duration,
    sender: Sender<(String, Result<(), AudioError>)>,
    receiver: Receiver<(String, Result<(), AudioError>)>,
}

impl AudioPlayer {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output: Arc<dyn AudioOutput>,
        language_tag: &str,
    ) -> Self {
        let (sender, receiver) = channel();
        Self {
            backend: Some((synthesizer, output)),
            language_tag: language_tag.to_string(),
            statuses: HashMap::new(),
            caption_duration: PLAYING_CAPTION,
            sender,
            receiver,
        }
    }

    pub fn with_caption_duration(mut self, duration: Duration) -> Self {
        self.caption_duration = duration;
        self
    }

    /// A player whose every request ends as `Unavailable`.
    pub fn disabled() -> Self {
        let (sender, receiver) = channel();
        Self {
            backend: None,
            language_tag: String::new(),
            statuses: HashMap::new(),
            caption_duration: PLAYING_CAPTION,
            sender,
            receiver,
        }
    }

    /// Starts speaking `text`. `key` identifies the button that asked, so its status can be shown.
    pub fn play(&mut self, key: &str, text: &str) {
        let Some((synthesizer, output)) = self.backend.clone() else {
            self.finish(key.to_string(), Err(AudioError::Disabled));
            return;
        };

        if text.trim().is_empty() {
            self.finish(key.to_string(), Err(AudioError::EmptyText));
            return;
        }

        if self.status(key) == AudioStatus::Loading {
            return;
        }
        self.statuses
            .insert(key.to_string(), (AudioStatus::Loading, Instant::now()));

        let sender = self.sender.clone();
        let key = key.to_string();
        let text = text.to_string();
        let language_tag = self.language_tag.clone();

        thread::spawn(move || {
            let result = synthesizer
                .synthesize(&text, &language_tag)
                .and_then(|clip| output.play(&clip));
            // Receiver is gone only when the app is shutting down
            let _ = sender.send((key, result));
        });
    }

    /// Collects finished requests and expires old "playing" captions.
    /// Call once per frame; returns true if any status changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((key, result)) = self.receiver.try_recv() {
            self.finish(key, result);
            changed = true;
        }

        let before = self.statuses.len();
        let caption_duration = self.caption_duration;
        self.statuses.retain(|_, (status, since)| {
            *status != AudioStatus::Playing || since.elapsed() < caption_duration
        });
        changed || self.statuses.len() != before
    }

    pub fn status(&self, key: &str) -> AudioStatus {
        self.statuses
            .get(key)
            .map(|(status, _)| *status)
            .unwrap_or(AudioStatus::Idle)
    }

    pub fn is_busy(&self) -> bool {
        self.statuses
            .values()
            .any(|(status, _)| *status == AudioStatus::Loading)
    }

    /// True while a request is running or a "playing" caption is waiting to expire.
    pub fn needs_repaint(&self) -> bool {
        self.statuses
            .values()
            .any(|(status, _)| matches!(status, AudioStatus::Loading | AudioStatus::Playing))
    }

    /// Drops the status of every key starting with `prefix`.
    pub fn forget(&mut self, prefix: &str) {
        self.statuses.retain(|key, _| !key.starts_with(prefix));
    }

    fn finish(&mut self, key: String, result: Result<(), AudioError>) {
        let status = match result {
            Ok(()) => AudioStatus::Playing,
            Err(e) => {
                log::warn!("Audio for '{}' unavailable: {}", key, e);
                AudioStatus::Unavailable
            }
        };
        self.statuses.insert(key, (status, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeSynth {
        fail: bool,
    }

    impl SpeechSynthesizer for FakeSynth {
        fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, AudioError> {
            if self.fail {
                return Err(AudioError::Http(503));
            }
            Ok(format!("{}:{}", language_tag, text).into_bytes())
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        played: Mutex<Vec<Vec<u8>>>,
    }

    impl AudioOutput for RecordingOutput {
        fn play(&self, clip: &[u8]) -> Result<(), AudioError> {
            self.played.lock().unwrap().push(clip.to_vec());
            Ok(())
        }
    }

    fn wait_for(player: &mut AudioPlayer, key: &str) -> AudioStatus {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            player.poll();
            let status = player.status(key);
            if status != AudioStatus::Loading {
                return status;
            }
            thread::sleep(Duration::from_millis(5));
        }
        player.status(key)
    }

    #[test]
    fn test_successful_playback() {
        let output = Arc::new(RecordingOutput::default());
        let mut player = AudioPlayer::new(Arc::new(FakeSynth { fail: false }), output.clone(), "id");

        player.play("vocab-0", "Hekal");

        assert_eq!(wait_for(&mut player, "vocab-0"), AudioStatus::Playing);
        assert_eq!(output.played.lock().unwrap()[0], b"id:Hekal".to_vec());
        assert!(!player.is_busy());
        assert!(player.needs_repaint());
    }

    #[test]
    fn test_playing_caption_expires() {
        let output = Arc::new(RecordingOutput::default());
        let mut player = AudioPlayer::new(Arc::new(FakeSynth { fail: false }), output, "id")
            .with_caption_duration(Duration::from_millis(20));

        player.play("vocab-1", "Riyar");
        assert_eq!(wait_for(&mut player, "vocab-1"), AudioStatus::Playing);
        thread::sleep(Duration::from_millis(30));
        player.poll();

        assert_eq!(player.status("vocab-1"), AudioStatus::Idle);
        assert!(!player.needs_repaint());
    }

    #[test]
    fn test_forget_drops_matching_keys() {
        let mut player = AudioPlayer::disabled();
        player.play("quiz-q_1234-0_0", "Fanaw");
        player.play("quiz-q_1234-0_1", "Omah");
        player.play("vocab-2", "Omah");

        player.forget("quiz-");

        assert_eq!(player.status("quiz-q_1234-0_0"), AudioStatus::Idle);
        assert_eq!(player.status("quiz-q_1234-0_1"), AudioStatus::Idle);
        assert_eq!(player.status("vocab-2"), AudioStatus::Unavailable);
    }

    #[test]
    fn test_synthesis_failure_is_silent() {
        let output = Arc::new(RecordingOutput::default());
        let mut player = AudioPlayer::new(Arc::new(FakeSynth { fail: true }), output.clone(), "id");

        player.play("sentence-1", "Ma'efer kako i kakarayan.");

        assert_eq!(wait_for(&mut player, "sentence-1"), AudioStatus::Unavailable);
        assert!(output.played.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_player() {
        let mut player = AudioPlayer::disabled();
        player.play("vocab-3", "Kilang");

        assert_eq!(player.status("vocab-3"), AudioStatus::Unavailable);
        assert_eq!(player.status("vocab-4"), AudioStatus::Idle);
    }

    #[test]
    fn test_empty_text_is_unavailable() {
        let output = Arc::new(RecordingOutput::default());
        let mut player = AudioPlayer::new(Arc::new(FakeSynth { fail: false }), output, "id");

        player.play("quiz", "   ");
        assert_eq!(player.status("quiz"), AudioStatus::Unavailable);
    }
}
