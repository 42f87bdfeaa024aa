//! Hands a synthesized mp3 to whatever the desktop uses to open audio files.

use super::AudioOutput;
use crate::error::AudioError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;

/// Clips live in a private temp directory that is removed when the player is dropped.
pub struct SystemPlayer {
    dir: TempDir,
    counter: AtomicU64,
}

impl SystemPlayer {
    pub fn new() -> Result<Self, AudioError> {
        Self::from_dir(tempfile::Builder::new().prefix("o_hekal_").tempdir()?)
    }

    pub fn new_in(parent: &Path) -> Result<Self, AudioError> {
        Self::from_dir(tempfile::Builder::new().prefix("o_hekal_").tempdir_in(parent)?)
    }

    fn from_dir(dir: TempDir) -> Result<Self, AudioError> {
        log::debug!("Audio clips go to {}", dir.path().display());
        Ok(Self {
            dir,
            counter: AtomicU64::new(0),
        })
    }

    pub fn clip_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the clip to a fresh file and returns its path.
    pub fn write_clip(&self, clip: &[u8]) -> Result<PathBuf, AudioError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let path = self.dir.path().join(format!("clip_{}.mp3", n));
        fs::write(&path, clip)?;
        Ok(path)
    }
}

impl AudioOutput for SystemPlayer {
    fn play(&self, clip: &[u8]) -> Result<(), AudioError> {
        let path = self.write_clip(clip)?;
        open_with_system(&path)?;
        log::debug!("Playing {}", path.display());
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn open_with_system(path: &Path) -> std::io::Result<()> {
    Command::new("open").arg(path).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_with_system(path: &Path) -> std::io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_with_system(path: &Path) -> std::io::Result<()> {
    Command::new("xdg-open").arg(path).spawn().map(|_| ())
}
