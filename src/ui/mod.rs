mod helpers;
pub mod layout;
pub mod views;

use crate::app::LearnApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_jobs();
        if self.jobs.any_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Navigation and language selection, hidden while a quiz runs
        top_panel(self, ctx, !matches!(self.state, AppState::Quiz));

        // Theme toggle
        bottom_panel(self, ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::WordList => views::word_list::ui_word_list(self, ctx),
            AppState::Dictionary => views::dictionary::ui_dictionary(self, ctx),
            AppState::MonolingualDictionary => views::monolingual::ui_monolingual(self, ctx),
            AppState::Flashcards => views::flashcards::ui_flashcards(self, ctx),
            AppState::QuizSetup => views::quiz_setup::ui_quiz_setup(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::QuizSummary => views::quiz_summary::ui_quiz_summary(self, ctx),
            AppState::Translate => views::translate::ui_translate(self, ctx),
            AppState::LearningPath => views::learning_path::ui_learning_path(self, ctx),
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
        }

        if self.confirm_clear_words {
            self.confirm_clear_words_window(ctx);
        }
        if self.confirm_clear_scores {
            self.confirm_clear_scores_window(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.ui_prefs());
        self.learning.flush();
    }
}
