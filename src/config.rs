//! Start-up options, read from the command line with environment fallbacks.

use crate::content::Dataset;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "o_hekal", about = "Amis vocabulary cards and quiz for Unit 23: O Hekal")]
pub struct Config {
    /// Built-in vocabulary table to show
    #[arg(long, value_enum, env = "O_HEKAL_DATASET", default_value = "moedict")]
    pub dataset: Dataset,

    /// JSON content pack to use instead of the built-in tables
    #[arg(long, env = "O_HEKAL_CONTENT")]
    pub content: Option<PathBuf>,

    /// Language tag passed to the speech service
    #[arg(long, env = "O_HEKAL_TTS_LANG", default_value = "id")]
    pub tts_lang: String,

    /// Disable text-to-speech (the env var accepts 1/0, yes/no, on/off, true/false)
    #[arg(long, env = "O_HEKAL_NO_AUDIO", value_parser = clap::builder::BoolishValueParser::new())]
    pub no_audio: bool,

    /// Fixed seed for drawing quiz rounds
    #[arg(long)]
    pub seed: Option<u64>,
}
