//! Main application UI.
//! Drill screen (prompt, guess, reveal, next, audio), lookup screen, vocabulary import/export.

use chrono::{DateTime, Local};
use eframe::egui;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use vocab_drill_app::config::{AppConfig, DEFAULT_CONFIG_FILE};
use vocab_drill_app::error::{DrillError, SynthesisError};
use vocab_drill_app::export::json::{export_json_to_path, import_json};
use vocab_drill_app::models::AudioOutcome;
use vocab_drill_app::speech::{AudioPlayer, SpeechRequests, SpeechSynthesizer};
use vocab_drill_app::{GuessTarget, RoundController, RoundState, SelectionPolicy, VocabularyStore};

const NOTICES_SHOWN: usize = 4;
const NOTICES_KEPT: usize = 50;

/// Application screen states
#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum AppScreen {
    #[default]
    Drill,
    Lookup,
}

enum Feedback {
    Correct,
    Incorrect,
    EmptyGuess,
}

struct Notice {
    at: DateTime<Local>,
    text: String,
}

struct LookupResult {
    text: String,
    translation: Option<String>,
}

/// Main application state
pub struct DrillApp {
    config: AppConfig,
    store: Option<VocabularyStore>,
    deck_name: String,
    controller: RoundController,
    round: Option<RoundState>,
    startup_error: Option<String>,

    current_screen: AppScreen,
    guess_input: String,
    feedback: Option<Feedback>,

    lookup_input: String,
    lookup_result: Option<LookupResult>,
    lookup_warning: Option<String>,

    speech: Option<SpeechRequests>,
    player: Option<AudioPlayer>,
    wanted_audio: Option<String>,
    notices: Vec<Notice>,

    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for DrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_speech(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.render_menu_bar(ui));
        egui::TopBottomPanel::bottom("notices").show(ctx, |ui| self.render_notices(ui));
        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            AppScreen::Drill => self.render_drill_screen(ui),
            AppScreen::Lookup => self.render_lookup_screen(ui),
        });

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
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

impl DrillApp {
    pub fn new(
        config: AppConfig,
        store: Result<VocabularyStore, DrillError>,
        synthesizer: Result<Option<Arc<dyn SpeechSynthesizer>>, SynthesisError>,
        deck_name: String,
    ) -> Self {
        let controller = RoundController::new(config.selection, config.guess_target);
        let mut notices = Vec::new();

        let speech = match synthesizer {
            Ok(provider) => provider.map(|p| SpeechRequests::new(p, &config.speech.language_tag)),
            Err(e) => {
                notices.push(Notice {
                    at: Local::now(),
                    text: format!("Speech is unavailable: {e}"),
                });
                None
            }
        };

        let (store, startup_error) = match store {
            Ok(store) => (Some(store), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let mut app = Self {
            config,
            store,
            deck_name,
            controller,
            round: None,
            startup_error,
            current_screen: AppScreen::Drill,
            guess_input: String::new(),
            feedback: None,
            lookup_input: "Hallo".to_string(),
            lookup_result: None,
            lookup_warning: None,
            speech,
            player: None,
            wanted_audio: None,
            notices,
            show_result_dialog: false,
            result_message: String::new(),
        };
        app.start_session();
        app
    }

    fn start_session(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        match self.controller.start_round(store) {
            Ok(round) => {
                self.round = Some(round);
                self.startup_error = None;
                self.clear_round_input();
                self.autoplay();
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start a round");
                self.round = None;
                self.startup_error = Some(e.to_string());
            }
        }
    }

    /// Resets per-word input. Audio still on its way for the old word is no longer wanted.
    fn clear_round_input(&mut self) {
        self.guess_input.clear();
        self.feedback = None;
        self.wanted_audio = None;
    }

    fn next_word(&mut self) {
        let (Some(store), Some(round)) = (&self.store, &mut self.round) else {
            return;
        };
        if let Err(e) = self.controller.advance(store, round) {
            tracing::error!(error = %e, "could not advance to the next word");
            self.round = None;
            self.startup_error = Some(e.to_string());
            return;
        }
        self.clear_round_input();
        self.autoplay();
    }

    fn reveal(&mut self) {
        if let Some(round) = &mut self.round {
            self.controller.reveal(round);
        }
    }

    fn submit_guess(&mut self) {
        let Some(round) = &mut self.round else {
            return;
        };
        if self.guess_input.trim().is_empty() {
            self.feedback = Some(Feedback::EmptyGuess);
            return;
        }
        let outcome = self.controller.check_guess(round, &self.guess_input);
        self.feedback = Some(if outcome.correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        });
    }

    fn autoplay(&mut self) {
        if self.config.speech.autoplay {
            self.play_current_term();
        }
    }

    fn play_current_term(&mut self) {
        if let Some(term) = self.round.as_ref().map(|r| r.current_term().to_string()) {
            self.play_text(&term);
        }
    }

    fn play_text(&mut self, text: &str) {
        let Some(speech) = &mut self.speech else {
            self.push_notice("Audio is disabled in the configuration.".to_string());
            return;
        };
        match speech.request(text) {
            Some(clip) => self.play_clip(clip),
            None => self.wanted_audio = Some(text.to_string()),
        }
    }

    fn play_clip(&mut self, clip: Vec<u8>) {
        if self.player.is_none() {
            match AudioPlayer::try_default() {
                Ok(player) => self.player = Some(player),
                Err(e) => {
                    self.push_notice(format!("Cannot play audio: {e}"));
                    return;
                }
            }
        }
        if let Some(player) = &mut self.player {
            if let Err(e) = player.play(clip) {
                self.push_notice(format!("Cannot play audio: {e}"));
            }
        }
    }

    /// Picks up finished speech requests. Replies for text no longer wanted are dropped.
    fn poll_speech(&mut self, ctx: &egui::Context) {
        let mut replies = Vec::new();
        if let Some(speech) = &mut self.speech {
            while let Some(reply) = speech.poll() {
                replies.push(reply);
            }
            if speech.is_pending() {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }

        for reply in replies {
            if self.wanted_audio.as_deref() != Some(reply.text.as_str()) {
                tracing::debug!(text = %reply.text, "dropping stale speech reply");
                continue;
            }
            self.wanted_audio = None;
            match reply.outcome {
                AudioOutcome::Clip(clip) => self.play_clip(clip),
                AudioOutcome::Warning(message) => self.push_notice(message),
            }
        }
    }

    fn push_notice(&mut self, text: String) {
        self.notices.push(Notice {
            at: Local::now(),
            text,
        });
        if self.notices.len() > NOTICES_KEPT {
            let excess = self.notices.len() - NOTICES_KEPT;
            self.notices.drain(..excess);
        }
    }

    fn audio_pending(&self) -> bool {
        match (&self.speech, &self.wanted_audio) {
            (Some(speech), Some(text)) => speech.is_pending_for(text),
            _ => false,
        }
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        let mut action_import = false;
        let mut action_export = false;

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.current_screen, AppScreen::Drill, "Drill");
            ui.selectable_value(&mut self.current_screen, AppScreen::Lookup, "Lookup");
            ui.separator();

            if ui.button("Load Vocabulary...").clicked() {
                action_import = true;
            }
            if ui
                .add_enabled(self.store.is_some(), egui::Button::new("Export Vocabulary..."))
                .clicked()
            {
                action_export = true;
            }
            ui.separator();

            match &self.store {
                Some(store) => ui.label(format!("{} ({} words)", self.deck_name, store.len())),
                None => ui.label("No vocabulary"),
            };
        });

        if action_import {
            self.handle_import();
        }
        if action_export {
            self.handle_export();
        }
    }

    fn render_notices(&mut self, ui: &mut egui::Ui) {
        let start = self.notices.len().saturating_sub(NOTICES_SHOWN);
        let mut action_clear = false;

        ui.horizontal(|ui| {
            ui.small(match &self.speech {
                Some(speech) => format!("Speech: {}", speech.provider_name()),
                None => "Speech: off".to_string(),
            });
            ui.small(match self.controller.policy() {
                SelectionPolicy::NoImmediateRepeat => "Order: random",
                SelectionPolicy::ShuffleBag => "Order: shuffle bag",
            });
            if !self.notices.is_empty() && ui.small_button("Clear").clicked() {
                action_clear = true;
            }
        });
        for notice in &self.notices[start..] {
            ui.colored_label(
                egui::Color32::from_rgb(200, 140, 0),
                format!("[{}] {}", notice.at.format("%H:%M:%S"), notice.text),
            );
        }

        if action_clear {
            self.notices.clear();
        }
    }

    /// Renders the drill screen: prompt, guess field and round actions
    fn render_drill_screen(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = &self.startup_error {
            ui.heading("Configuration error");
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::RED, error);
            ui.add_space(10.0);
            ui.label(format!(
                "Fix the vocabulary source in {DEFAULT_CONFIG_FILE} and restart, or load a vocabulary file."
            ));
            return;
        }
        let Some(round) = &self.round else {
            return;
        };

        // Clone values to avoid borrowing issues
        let term = round.current_term().to_string();
        let translation = round.visible_translation().map(str::to_string);
        let revealed = round.revealed();

        ui.group(|ui| {
            ui.set_min_height(180.0);
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(egui::RichText::new(&term).size(32.0));
                ui.add_space(20.0);

                match &translation {
                    Some(translation) => {
                        ui.label(egui::RichText::new(translation).size(20.0));
                    }
                    None => {
                        ui.label("(Click 'Reveal' to show the translation)");
                    }
                }
                ui.add_space(20.0);
            });
        });

        ui.add_space(15.0);

        let mut action_check = false;
        let mut action_reveal = false;
        let mut action_next = false;
        let mut action_play = false;

        let prompt = match self.controller.guess_target() {
            GuessTarget::Term => "Type the German word:",
            GuessTarget::Translation => "Type the English translation:",
        };
        ui.label(prompt);
        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.guess_input);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action_check = true;
            }
            if ui.button("Check").clicked() {
                action_check = true;
            }
        });

        match self.feedback {
            Some(Feedback::Correct) => {
                ui.colored_label(egui::Color32::from_rgb(0, 150, 0), "Correct!");
            }
            Some(Feedback::Incorrect) => {
                ui.colored_label(egui::Color32::RED, "Not quite, try again or reveal.");
            }
            Some(Feedback::EmptyGuess) => {
                ui.colored_label(egui::Color32::from_rgb(200, 140, 0), "Please enter a guess.");
            }
            None => {}
        }

        ui.add_space(15.0);

        ui.horizontal(|ui| {
            if ui.add_enabled(!revealed, egui::Button::new("Reveal")).clicked() {
                action_reveal = true;
            }
            if ui.button("Next word").clicked() {
                action_next = true;
            }
            if ui
                .add_enabled(self.speech.is_some(), egui::Button::new("Play audio"))
                .clicked()
            {
                action_play = true;
            }
            if self.audio_pending() {
                ui.spinner();
            }
        });

        // Execute deferred actions
        if action_check {
            self.submit_guess();
        }
        if action_reveal {
            self.reveal();
        }
        if action_play {
            self.play_current_term();
        }
        if action_next {
            self.next_word();
        }
    }

    /// Renders the free-text lookup screen
    fn render_lookup_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading("Lookup");
        ui.label("Enter a German word or phrase to get its translation and hear the pronunciation.");
        ui.add_space(10.0);

        let mut action_translate = false;
        ui.horizontal(|ui| {
            ui.label("German text:");
            let response = ui.text_edit_singleline(&mut self.lookup_input);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action_translate = true;
            }
        });
        if ui.button("Translate & Pronounce").clicked() {
            action_translate = true;
        }

        ui.add_space(15.0);

        if let Some(warning) = &self.lookup_warning {
            ui.colored_label(egui::Color32::from_rgb(200, 140, 0), warning);
        }
        if let Some(result) = &self.lookup_result {
            ui.heading("Translation:");
            ui.label(
                result
                    .translation
                    .as_deref()
                    .unwrap_or("Translation not found."),
            );
            ui.add_space(10.0);
            ui.heading("Pronunciation:");
            if self.speech.is_none() {
                ui.label("(audio disabled)");
            } else if self.wanted_audio.as_deref() == Some(result.text.as_str()) {
                ui.spinner();
            } else {
                ui.label(format!("\"{}\"", result.text));
            }
        }

        if action_translate {
            self.translate_lookup();
        }
    }

    fn translate_lookup(&mut self) {
        let text = self.lookup_input.trim().to_string();
        if text.is_empty() {
            self.lookup_result = None;
            self.lookup_warning =
                Some("Please enter some text to translate and pronounce.".to_string());
            return;
        }

        let translation = self
            .store
            .as_ref()
            .and_then(|store| store.translate(&text))
            .map(str::to_string);
        self.lookup_warning = None;
        self.lookup_result = Some(LookupResult {
            text: text.clone(),
            translation,
        });
        if self.speech.is_some() {
            self.play_text(&text);
        }
    }

    /// Replaces the vocabulary with a deck picked from a JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match load_deck_file(&path) {
            Ok((name, store)) => {
                self.result_message =
                    format!("Vocabulary '{}' loaded with {} words!", name, store.len());
                self.deck_name = name;
                self.store = Some(store);
                self.start_session();
            }
            Err(e) => {
                self.result_message = format!(
                    "Import failed: {}\n\nPlease check if the file has correct structure:\n{{\n  \"name\": \"Deck Name\",\n  \"entries\": [{{ \"term\": \"...\", \"translation\": \"...\" }}]\n}}",
                    e
                );
            }
        }
        self.show_result_dialog = true;
    }

    /// Saves the current vocabulary to a JSON file
    fn handle_export(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", self.deck_name))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        let deck = store.to_deck(&self.deck_name);
        self.result_message = match export_json_to_path(&deck, &path) {
            Ok(()) => format!("Vocabulary '{}' exported successfully!", deck.name),
            Err(e) => format!("Export failed: {}", e),
        };
        self.show_result_dialog = true;
    }
}

fn load_deck_file(path: &Path) -> Result<(String, VocabularyStore), DrillError> {
    let deck = import_json(path)?;
    let name = deck.name.clone();
    let store = VocabularyStore::try_from(deck)?;
    Ok((name, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    /// Returns an empty clip, which can never be played; any attempt leaves a notice.
    struct SilentProvider;

    impl SpeechSynthesizer for SilentProvider {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn synthesize(&self, _text: &str, _language_tag: &str) -> Result<Vec<u8>, SynthesisError> {
            thread::sleep(Duration::from_millis(50));
            Ok(Vec::new())
        }
    }

    fn two_words() -> VocabularyStore {
        VocabularyStore::from_pairs(&[("Hallo", "Hello"), ("Danke", "Thank you")]).unwrap()
    }

    fn app_with_speech() -> DrillApp {
        let provider: Arc<dyn SpeechSynthesizer> = Arc::new(SilentProvider);
        DrillApp::new(
            AppConfig::default(),
            Ok(two_words()),
            Ok(Some(provider)),
            "Test".to_string(),
        )
    }

    fn app_without_speech() -> DrillApp {
        DrillApp::new(AppConfig::default(), Ok(two_words()), Ok(None), "Test".to_string())
    }

    fn drain_speech(app: &mut DrillApp) {
        let ctx = egui::Context::default();
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.poll_speech(&ctx);
            let pending = app.speech.as_ref().is_some_and(|s| s.is_pending());
            if !pending {
                return;
            }
            assert!(Instant::now() < deadline, "no speech reply in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_reply_for_current_word_is_played() {
        let mut app = app_with_speech();

        app.play_current_term();
        assert!(app.wanted_audio.is_some());
        drain_speech(&mut app);

        assert_eq!(app.wanted_audio, None);
        assert_eq!(app.notices.len(), 1);
        assert!(app.notices[0].text.starts_with("Cannot play audio"));
    }

    #[test]
    fn test_reply_for_previous_word_is_dropped() {
        let mut app = app_with_speech();
        let first = app.round.as_ref().unwrap().current_term().to_string();

        app.play_current_term();
        app.next_word();
        assert_ne!(app.round.as_ref().unwrap().current_term(), first);
        assert_eq!(app.wanted_audio, None);

        drain_speech(&mut app);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_reply_after_new_session_is_dropped() {
        let mut app = app_with_speech();

        app.play_current_term();
        app.start_session();
        drain_speech(&mut app);

        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_blank_lookup_shows_warning() {
        let mut app = app_without_speech();
        app.lookup_input = "   ".to_string();

        app.translate_lookup();

        assert!(app.lookup_result.is_none());
        assert_eq!(
            app.lookup_warning.as_deref(),
            Some("Please enter some text to translate and pronounce.")
        );
    }

    #[test]
    fn test_lookup_known_and_unknown_text() {
        let mut app = app_without_speech();

        app.lookup_input = " danke ".to_string();
        app.translate_lookup();
        let result = app.lookup_result.as_ref().unwrap();
        assert_eq!(result.text, "danke");
        assert_eq!(result.translation.as_deref(), Some("Thank you"));
        assert!(app.lookup_warning.is_none());

        app.lookup_input = "Apfelstrudel".to_string();
        app.translate_lookup();
        let result = app.lookup_result.as_ref().unwrap();
        assert_eq!(result.text, "Apfelstrudel");
        assert_eq!(result.translation, None);
    }

    #[test]
    fn test_notices_are_capped() {
        let mut app = app_without_speech();

        for i in 0..NOTICES_KEPT + 10 {
            app.push_notice(format!("notice {i}"));
        }

        assert_eq!(app.notices.len(), NOTICES_KEPT);
        assert_eq!(app.notices[0].text, "notice 10");
        assert_eq!(
            app.notices.last().unwrap().text,
            format!("notice {}", NOTICES_KEPT + 9)
        );
    }
}
