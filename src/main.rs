mod app;
use o_hekal_app::*;

use app::HekalApp;
use audio::{AudioPlayer, GoogleTts, SystemPlayer};
use clap::Parser;
use config::Config;
use content::json::import_content_pack;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let loaded = match &config.content {
        Some(path) => import_content_pack(path),
        None => ContentStore::builtin(config.dataset),
    };
    let store = match loaded {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load content: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Loaded '{}' ({}): {} words, {} sentences, {} quiz questions",
        store.title(),
        config
            .content
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| config.dataset.label().to_string()),
        store.list_vocabulary().len(),
        store.list_sentences().len(),
        store.list_quiz_pool().len()
    );

    let audio = if config.no_audio {
        AudioPlayer::disabled()
    } else {
        match GoogleTts::new().and_then(|tts| Ok((tts, SystemPlayer::new()?))) {
            Ok((tts, output)) => AudioPlayer::new(Arc::new(tts), Arc::new(output), &config.tts_lang),
            Err(e) => {
                log::warn!("Audio setup failed, audio disabled: {}", e);
                AudioPlayer::disabled()
            }
        }
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        content::builtin::UNIT_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(HekalApp::new(store, audio, rng)))),
    )
}
