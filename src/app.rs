//! Main application UI.
//! Renders the vocabulary/sentence cards and the quiz, and forwards clicks into the quiz session.

use crate::audio::{AudioPlayer, AudioStatus};
use crate::content::builtin::{self, Dataset};
use crate::content::json::{export_content_pack, import_content_pack, pack_file_name};
use crate::models::{AnswerOutcome, ContentStore, QuizSession, QuizState};
use chrono::{DateTime, Local};
use eframe::egui::{self, Color32, RichText};
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const GREEN_DARK: Color32 = Color32::from_rgb(0x1B, 0x5E, 0x20);
const GREEN_MID: Color32 = Color32::from_rgb(0x43, 0xA0, 0x47);
const GREEN_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xF5, 0xE9);
const GREEN_PALE: Color32 = Color32::from_rgb(0xF1, 0xF8, 0xE9);
const GREEN_BADGE: Color32 = Color32::from_rgb(0xC8, 0xE6, 0xC9);
const GRAY_TEXT: Color32 = Color32::from_rgb(0x7F, 0x8C, 0x8D);
const SOURCE_TEXT: Color32 = Color32::from_rgb(0xAA, 0xAA, 0xAA);

const CELEBRATION: Duration = Duration::from_secs(1);
const QUIZ_AUDIO_PREFIX: &str = "quiz-";

/// System fonts tried, in order, for the Chinese glosses.
const CJK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

#[derive(Default, PartialEq, Eq, Clone, Copy)]
enum AppTab {
    #[default]
    Learn,
    Quiz,
}

/// Feedback for the last submitted answer
enum Feedback {
    None,
    Correct { until: Instant },
    Wrong { hint: String },
}

/// Main application state
pub struct HekalApp {
    store: ContentStore,
    session: QuizSession,
    rng: StdRng,
    audio: AudioPlayer,

    current_tab: AppTab,
    choices: HashMap<String, String>,
    feedback: Feedback,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    show_result_dialog: bool,
    result_message: String,
    fonts_installed: bool,
}

/// Formats a round start time as HH:MM
fn format_round_time(time: DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}

fn install_cjk_font(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        log::warn!("No CJK font found; Chinese text may not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Using CJK font {}", path);
}

impl eframe::App for HekalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.fonts_installed {
            install_cjk_font(ctx);
            self.fonts_installed = true;
        }

        self.audio.poll();
        if self.audio.needs_repaint() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.render_menu(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.store.title()).size(30.0).strong().color(GREEN_DARK));
                ui.label(RichText::new(builtin::UNIT_SUBTITLE).color(GRAY_TEXT));
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, AppTab::Learn, "📚 詞彙與句型");
                ui.selectable_value(&mut self.current_tab, AppTab::Quiz, "🎲 隨機挑戰");
            });
            ui.separator();

            match self.current_tab {
                AppTab::Learn => self.render_learn_tab(ui),
                AppTab::Quiz => self.render_quiz_tab(ui),
            }
        });

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_result_dialog {
            egui::Window::new("Content")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl HekalApp {
    pub fn new(store: ContentStore, audio: AudioPlayer, mut rng: StdRng) -> Self {
        let session = QuizSession::new(store.list_quiz_pool(), &mut rng);
        Self {
            store,
            session,
            rng,
            audio,
            current_tab: AppTab::Learn,
            choices: HashMap::new(),
            feedback: Feedback::None,
            show_confirmation_dialog: false,
            allowed_to_close: false,
            show_result_dialog: false,
            result_message: String::new(),
            fonts_installed: false,
        }
    }

    fn render_menu(&mut self, ctx: &egui::Context) {
        let mut action_dataset: Option<Dataset> = None;
        let mut action_import = false;
        let mut action_export = false;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Content", |ui| {
                    for dataset in [Dataset::Moedict, Dataset::Sentences] {
                        if ui.button(format!("Built-in: {}", dataset.label())).clicked() {
                            action_dataset = Some(dataset);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Load content pack…").clicked() {
                        action_import = true;
                        ui.close_menu();
                    }
                    if ui.button("Export content pack…").clicked() {
                        action_export = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Execute deferred actions
        if let Some(dataset) = action_dataset {
            match ContentStore::builtin(dataset) {
                Ok(store) => {
                    log::info!("Switched to built-in dataset {}", dataset.label());
                    self.replace_content(store);
                }
                Err(e) => self.show_result(format!("Failed to load built-in content: {}", e)),
            }
        }
        if action_import {
            self.handle_import();
        }
        if action_export {
            self.handle_export();
        }
    }

    /// Renders the vocabulary cards and example sentences
    fn render_learn_tab(&mut self, ui: &mut egui::Ui) {
        // Store the clicked play button to act on after rendering
        let mut action_play: Option<(String, String)> = None;
        let audio = &self.audio;

        egui::ScrollArea::vertical()
            .id_salt("learn_scroll")
            .show(ui, |ui| {
                ui.heading("📝 核心單字");
                ui.columns(2, |cols| {
                    for (i, word) in self.store.list_vocabulary().iter().enumerate() {
                        let ui = &mut cols[i % 2];
                        let key = format!("vocab-{}", i);

                        egui::Frame::group(ui.style())
                            .fill(GREEN_LIGHT)
                            .stroke(egui::Stroke::new(1.0, GREEN_MID))
                            .rounding(12.0)
                            .inner_margin(12.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.vertical_centered(|ui| {
                                    ui.label(RichText::new(&word.icon).size(40.0));
                                    ui.label(RichText::new(&word.amis).size(22.0).strong().color(GREEN_DARK));
                                    ui.label(RichText::new(&word.chinese).size(16.0).color(GRAY_TEXT));
                                    ui.label(
                                        RichText::new(format!("src: {}", word.source))
                                            .size(11.0)
                                            .italics()
                                            .color(SOURCE_TEXT),
                                    );
                                });
                            });

                        ui.horizontal(|ui| {
                            if ui.button("🔊 聽發音").clicked() {
                                action_play = Some((key.clone(), word.amis.clone()));
                            }
                            audio_caption(ui, audio.status(&key));
                        });
                        ui.add_space(10.0);
                    }
                });

                ui.separator();
                ui.heading("🗣️ 實用句型");
                for (i, sentence) in self.store.list_sentences().iter().enumerate() {
                    let key = format!("sentence-{}", i);

                    egui::Frame::none()
                        .fill(GREEN_PALE)
                        .stroke(egui::Stroke::new(1.0, GREEN_BADGE))
                        .rounding(8.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                RichText::new(format!("{} {}", sentence.icon, sentence.amis))
                                    .size(20.0)
                                    .strong()
                                    .color(GREEN_DARK),
                            );
                            ui.label(RichText::new(&sentence.chinese).size(16.0));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                ui.label(
                                    RichText::new(format!("src: {}", sentence.source))
                                        .size(11.0)
                                        .italics()
                                        .color(SOURCE_TEXT),
                                );
                            });
                        });

                    ui.horizontal(|ui| {
                        if ui.button("▶️ 播放句型").clicked() {
                            action_play = Some((key.clone(), sentence.amis.clone()));
                        }
                        audio_caption(ui, audio.status(&key));
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some((key, text)) = action_play {
            self.audio.play(&key, &text);
        }
    }

    /// Renders the current question, the celebration banner or the final score
    fn render_quiz_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("🎲 隨機評量");
        ui.label(
            RichText::new(format!("Round drawn at {}", format_round_time(self.session.started_at())))
                .size(11.0)
                .color(SOURCE_TEXT),
        );
        ui.add_space(6.0);

        if let Feedback::Correct { until } = self.feedback {
            if Instant::now() < until {
                ui.add(egui::ProgressBar::new(self.session.progress()));
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🎉 答對了！").size(32.0).strong().color(GREEN_DARK));
                });
                ui.ctx().request_repaint_after(until.saturating_duration_since(Instant::now()));
                return;
            }
            self.feedback = Feedback::None;
        }

        match self.session.state() {
            QuizState::InProgress(index) => self.render_question(ui, index),
            QuizState::Completed => self.render_completed(ui),
        }
    }

    fn render_question(&mut self, ui: &mut egui::Ui, index: usize) {
        let Some(active) = self.session.current_item() else {
            return;
        };
        let widget_key = format!("q_{}_{}", self.session.session_id(), index);
        let audio_key = format!("{}{}", QUIZ_AUDIO_PREFIX, widget_key);

        ui.add(egui::ProgressBar::new(self.session.progress()));
        ui.label(RichText::new(self.session.question_label()).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(&active.item.prompt).size(24.0).strong().color(GREEN_DARK));

        // Store actions to execute after UI rendering
        let mut action_play = false;
        let mut action_submit = false;

        if active.item.has_audio() {
            ui.horizontal(|ui| {
                if ui.button("🎧 播放題目音檔").clicked() {
                    action_play = true;
                }
                audio_caption(ui, self.audio.status(&audio_key));
            });
        }

        ui.add_space(10.0);
        ui.label("請選擇正確答案：");
        let mut selected = self.choices.get(&widget_key).cloned();
        ui.push_id(&widget_key, |ui| {
            for option in &active.shuffled_options {
                ui.radio_value(&mut selected, Some(option.clone()), RichText::new(option).size(18.0));
            }
        });

        ui.add_space(10.0);
        if ui
            .add_enabled(selected.is_some(), egui::Button::new(RichText::new("送出答案").size(18.0)))
            .clicked()
        {
            action_submit = true;
        }

        if let Feedback::Wrong { hint } = &self.feedback {
            ui.add_space(6.0);
            ui.colored_label(Color32::from_rgb(0xC6, 0x28, 0x28), format!("不對喔！提示：{}", hint));
        }

        // Execute deferred actions
        let prompt_audio = active.item.audio_text.clone();
        if action_play {
            self.audio.play(&audio_key, &prompt_audio);
        }
        if let Some(choice) = selected {
            self.choices.insert(widget_key, choice.clone());
            if action_submit {
                self.submit(&choice);
            }
        }
    }

    fn render_completed(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::ProgressBar::new(1.0));
        ui.add_space(20.0);

        egui::Frame::none()
            .fill(GREEN_BADGE)
            .rounding(20.0)
            .inner_margin(30.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🏆 挑戰成功！").size(30.0).strong().color(GREEN_DARK));
                    ui.label(RichText::new(format!("本次得分：{}", self.session.score())).size(20.0));
                    ui.label("你已經學會自然環境的詞彙了！");
                });
            });

        ui.add_space(20.0);
        if ui.button(RichText::new("🔄 再來一局 (重新抽題)").size(18.0)).clicked() {
            self.restart_quiz();
        }
    }

    fn submit(&mut self, choice: &str) {
        match self.session.submit_answer(choice) {
            AnswerOutcome::Correct { .. } => {
                self.feedback = Feedback::Correct {
                    until: Instant::now() + CELEBRATION,
                };
            }
            AnswerOutcome::Incorrect { hint } => {
                self.feedback = Feedback::Wrong { hint };
            }
            AnswerOutcome::RoundOver => {}
        }
    }

    fn restart_quiz(&mut self) {
        self.session.restart(self.store.list_quiz_pool(), &mut self.rng);
        self.choices.clear();
        self.audio.forget(QUIZ_AUDIO_PREFIX);
        self.feedback = Feedback::None;
    }

    /// Swaps in new tables and draws a fresh round from them
    fn replace_content(&mut self, store: ContentStore) {
        self.store = store;
        self.restart_quiz();
    }

    fn show_result(&mut self, message: String) {
        self.result_message = message;
        self.show_result_dialog = true;
    }

    /// Handles content pack import from a JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match import_content_pack(&path) {
            Ok(store) => {
                let message = format!(
                    "Content '{}' loaded: {} words, {} sentences, {} questions",
                    store.title(),
                    store.list_vocabulary().len(),
                    store.list_sentences().len(),
                    store.list_quiz_pool().len()
                );
                self.replace_content(store);
                self.show_result(message);
            }
            Err(e) => {
                log::warn!("Content import from {} failed: {}", path.display(), e);
                self.show_result(format!(
                    "Import failed: {}\n\nThe current content was kept. A pack looks like:\n{{\n  \"title\": \"Unit name\",\n  \"vocabulary\": [...],\n  \"sentences\": [...],\n  \"quiz_pool\": [...]\n}}",
                    e
                ));
            }
        }
    }

    /// Handles content pack export to a JSON file
    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(pack_file_name(self.store.title()))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        match export_content_pack(&self.store, &path) {
            Ok(()) => self.show_result(format!("Content '{}' exported successfully!", self.store.title())),
            Err(e) => self.show_result(format!("Export failed: {}", e)),
        }
    }
}

/// Small status text next to a play button
fn audio_caption(ui: &mut egui::Ui, status: AudioStatus) {
    match status {
        AudioStatus::Idle => {}
        AudioStatus::Loading => {
            ui.spinner();
        }
        AudioStatus::Playing => {
            ui.label(RichText::new("🔊").color(GREEN_MID));
        }
        AudioStatus::Unavailable => {
            ui.label(RichText::new("🔇 (語音生成暫時無法使用)").size(11.0).color(GRAY_TEXT));
        }
    }
}
